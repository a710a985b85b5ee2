fn main() {
    if let Err(err) = labelgen::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
