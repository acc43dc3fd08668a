fn main() {
    if let Err(e) = perfdigest::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
