//! Textual rendering for manual inspection
//!
//! Rank 1 renders as a single line, rank 2 as one line per row, and rank 3
//! as a sequence of `Slice i=<i>:` blocks each followed by a blank line.
//! The empty state renders as the empty string.

use std::fmt::{self, Write};

use super::types::Array;

/// Options controlling [`Array::render`]
///
/// # Examples
///
/// ```
/// use trirank_core::{Array, PrintOptions};
///
/// let a = Array::from_slice(&[1.0, 2.5, 3.0, 4.0], &[2, 2]).unwrap();
///
/// let opts = PrintOptions {
///     precision: Some(1),
///     separator: ", ".to_string(),
///     ..PrintOptions::default()
/// };
/// assert_eq!(a.render(&opts), "1.0, 2.5\n3.0, 4.0\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrintOptions {
    /// Digits after the decimal point; `None` prints the shortest exact form
    /// (default: `None`)
    pub precision: Option<usize>,

    /// Text placed between elements of a row (default: a single space)
    pub separator: String,

    /// Print `Slice i=<i>:` before each slice of a rank-3 array
    /// (default: `true`)
    pub slice_headers: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            precision: None,
            separator: " ".to_string(),
            slice_headers: true,
        }
    }
}

impl PrintOptions {
    fn write_value<W: Write>(&self, out: &mut W, value: f64) -> fmt::Result {
        match self.precision {
            Some(p) => write!(out, "{value:.p$}"),
            None => write!(out, "{value}"),
        }
    }

    fn write_row<W: Write>(&self, out: &mut W, row: &[f64]) -> fmt::Result {
        for (i, &value) in row.iter().enumerate() {
            if i > 0 {
                out.write_str(&self.separator)?;
            }
            self.write_value(out, value)?;
        }
        out.write_char('\n')
    }
}

impl Array {
    fn write_with<W: Write>(&self, out: &mut W, opts: &PrintOptions) -> fmt::Result {
        match *self.shape() {
            [_] => opts.write_row(out, self.as_slice()),
            [_, cols] => {
                for row in self.as_slice().chunks(cols) {
                    opts.write_row(out, row)?;
                }
                Ok(())
            }
            [_, rows, cols] => {
                for (i, slice) in self.as_slice().chunks(rows * cols).enumerate() {
                    if opts.slice_headers {
                        writeln!(out, "Slice i={i}:")?;
                    }
                    for row in slice.chunks(cols) {
                        opts.write_row(out, row)?;
                    }
                    out.write_char('\n')?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Render the array as text using `opts`.
    ///
    /// # Examples
    ///
    /// ```
    /// use trirank_core::{Array, PrintOptions};
    ///
    /// let cube = Array::arange(0, 4).unwrap().into_view(&[2, 1, 2]).unwrap();
    /// assert_eq!(
    ///     cube.render(&PrintOptions::default()),
    ///     "Slice i=0:\n0 1\n\nSlice i=1:\n2 3\n\n"
    /// );
    /// ```
    pub fn render(&self, opts: &PrintOptions) -> String {
        Rendered { array: self, opts }.to_string()
    }
}

/// [`Array`] paired with the options it is displayed with.
struct Rendered<'a> {
    array: &'a Array,
    opts: &'a PrintOptions,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.array.write_with(f, self.opts)
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, &PrintOptions::default())
    }
}
