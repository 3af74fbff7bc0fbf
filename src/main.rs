fn main() {
    env_logger::init();
    randqueue::cmd::run();
}
