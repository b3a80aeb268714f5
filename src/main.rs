fn main() {
    pbm_bin::main();
}
