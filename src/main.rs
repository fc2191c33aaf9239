/// Binary entrypoint for the `regkeygen` executable.
///
/// Keeps the binary thin: all logic lives in the `regkeygen_lib` crate so
/// unit tests can import library functions directly.
fn main() {
    regkeygen_lib::run();
}
