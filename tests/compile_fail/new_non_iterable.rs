use iterr::iter::Iter;

fn main() {
    let _sequence = Iter::new(42);
}
