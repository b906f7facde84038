/// Splits an arena casting cost into its cost tokens.
///
/// Arena encodes costs as each symbol prefixed by an `o`, e.g. `o2o(U/B)o(U/B)`
/// for {2}{U/B}{U/B}. Zero generic costs (`o0`) carry no information and are dropped.
pub fn parse_casting_cost(casting_cost: &str) -> Vec<String> {
    casting_cost
        .split('o')
        .skip(1)
        .filter(|symbol| *symbol != "0")
        .map(String::from)
        .collect()
}
