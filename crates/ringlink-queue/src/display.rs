use std::fmt::{self, Display};

/// Writes `values` separated by single spaces.
pub(crate) fn write_spaced<I>(f: &mut fmt::Formatter<'_>, values: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    for (position, value) in values.into_iter().enumerate() {
        if position > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}
