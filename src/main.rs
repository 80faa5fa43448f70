fn main() {
    crosscheck::cli::run();
}
