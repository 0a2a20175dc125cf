fn main() {
    std::process::exit(connectto_lib::run());
}
