fn main() {
    roleprompt::cli::run();
}
