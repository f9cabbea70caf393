use proptest::prelude::*;

/// Arbitrary positive price series, including the empty one.
pub fn price_sequence(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0f64..1_000.0, 0..=max_len)
}

/// Quoted prices with two decimals, most of which have no exact binary form.
pub fn cent_price_sequence(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(100u32..100_000, 0..=max_len)
        .prop_map(|cents| cents.into_iter().map(|c| f64::from(c) / 100.0).collect())
}

/// Non-empty series followed by `tail` copies of its last price.
pub fn flat_tail_sequence(max_len: usize, tail: usize) -> impl Strategy<Value = Vec<f64>> {
    (
        prop_oneof![
            prop::collection::vec(1.0f64..1_000.0, 1..=max_len),
            cent_price_sequence(max_len).prop_filter("non-empty", |p| !p.is_empty()),
        ],
        Just(tail),
    )
        .prop_map(|(mut prices, tail)| {
            if let Some(&last) = prices.last() {
                prices.extend(std::iter::repeat(last).take(tail));
            }
            prices
        })
}

/// Strictly increasing series of at least two prices.
pub fn strictly_increasing(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    (1.0f64..100.0, prop::collection::vec(0.01f64..5.0, 1..max_len)).prop_map(|(start, steps)| {
        let mut price = start;
        let mut prices = vec![price];
        for step in steps {
            price += step;
            prices.push(price);
        }
        prices
    })
}

/// Strictly decreasing series of at least two prices, staying positive.
pub fn strictly_decreasing(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    strictly_increasing(max_len).prop_map(|mut prices| {
        prices.reverse();
        prices
    })
}
