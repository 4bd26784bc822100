fn main() {
    unified::run_cli();
}
