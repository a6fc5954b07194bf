fn main() {
    if let Err(e) = pivotbench::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
