use std::io::Write;

use anyhow::Result;

use crate::domain::discount::{DiscountCalculator, NominalDiscount, PercentDiscount};

/// Discount policies are added as new strategies, the calculator is untouched.
pub fn run(out: &mut dyn Write) -> Result<()> {
    let discount = DiscountCalculator::new(NominalDiscount::default());
    writeln!(out, "{}", discount.calculate(200.0))?;

    let discount = DiscountCalculator::new(PercentDiscount::default());
    writeln!(out, "{}", discount.calculate(200.0))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript() {
        let mut buf = Vec::new();
        run(&mut buf).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "100\n100\n");
    }
}
