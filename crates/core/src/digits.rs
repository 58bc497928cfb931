//! Decimal digit helpers shared by the transformations

/// Decimal digits of `n`, most significant first
pub fn digits(n: u64) -> Vec<u8> {
    let mut digits = Vec::new();
    let mut rest = n;

    loop {
        digits.push((rest % 10) as u8);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }

    digits.reverse();
    digits
}

/// Sum of the decimal digits of `n`
pub fn digit_sum(n: u64) -> u64 {
    digits(n).into_iter().map(u64::from).sum()
}
