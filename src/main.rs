// This binary crate is intentionally minimal.
// All training logic lives in the library (src/lib.rs and its modules).
// Run demos with:
//   cargo run --example xor
fn main() {
    println!("numgrad: finite-difference training for tiny feed-forward networks.");
    println!("Run `cargo run --example linear`, `--example gates` or `--example xor`.");
}
