//! `{v1,v2,...}` rendering for filled vectors.

use std::fmt;

/// Formats a slice as `{v1,v2,...,vN}`; an empty slice renders as `{}`.
#[derive(Debug, Clone, Copy)]
pub struct Braced<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for Braced<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_braced_list() {
        assert_eq!(Braced(&[1, 5, 3]).to_string(), "{1,5,3}");
    }

    #[test]
    fn renders_edges() {
        let empty: [i64; 0] = [];
        assert_eq!(Braced(&empty).to_string(), "{}");
        assert_eq!(Braced(&[7]).to_string(), "{7}");
        assert_eq!(Braced(&["a", "b"]).to_string(), "{a,b}");
    }
}
