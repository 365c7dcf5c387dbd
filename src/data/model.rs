use std::fmt;

// ---------------------------------------------------------------------------
// ColumnName – combined header text of one column
// ---------------------------------------------------------------------------

/// Header text of a column, read as "quantity unit".
///
/// Instrument exports usually spread the name over several header rows
/// (`Wavelength` / `nm`), which the loader joins with a single space.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnName(String);

impl ColumnName {
    pub fn new(text: impl Into<String>) -> Self {
        ColumnName(text.into())
    }

    /// Name used when a column has no header tokens at all.
    pub fn placeholder(index: usize) -> Self {
        ColumnName(format!("column{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into `(quantity, unit)`.
    ///
    /// The unit is the last whitespace-separated token; everything before it
    /// is the quantity. A single token has an empty unit.
    pub fn split(&self) -> (&str, &str) {
        let text = self.0.trim();
        match text.rsplit_once(char::is_whitespace) {
            Some((quantity, unit)) => (quantity.trim_end(), unit),
            None => (text, ""),
        }
    }

    pub fn quantity(&self) -> &str {
        self.split().0
    }

    pub fn unit(&self) -> &str {
        self.split().1
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Series – one named column of values
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: ColumnName,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: ColumnName, values: Vec<f64>) -> Self {
        Series { name, values }
    }
}

// ---------------------------------------------------------------------------
// SpectralDataset – an (x, y) pair read from one file
// ---------------------------------------------------------------------------

/// A measured or derived curve.
///
/// `x` is the independent variable (wavelength or row index) and `y` the
/// dependent one (reflectance, intensity, or a difference of those). Both
/// have the same length and keep source row order.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralDataset {
    pub x: Series,
    pub y: Series,
}

impl SpectralDataset {
    pub fn new(x: Series, y: Series) -> Self {
        debug_assert_eq!(x.values.len(), y.values.len());
        SpectralDataset { x, y }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.values.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.x.values.is_empty()
    }

    /// Sample `i` as `(x, y)`.
    pub fn point(&self, i: usize) -> Option<(f64, f64)> {
        Some((*self.x.values.get(i)?, *self.y.values.get(i)?))
    }

    /// Iterate samples as `[x, y]`, the shape `egui_plot` consumes.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.x
            .values
            .iter()
            .zip(self.y.values.iter())
            .map(|(&x, &y)| [x, y])
    }

    /// Same x axis and names, new dependent values.
    pub fn with_y_values(&self, values: Vec<f64>) -> Self {
        SpectralDataset {
            x: self.x.clone(),
            y: Series::new(self.y.name.clone(), values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_quantity_and_unit() {
        let name = ColumnName::new("Wavelength nm");
        assert_eq!(name.split(), ("Wavelength", "nm"));
    }

    #[test]
    fn multi_word_quantity_keeps_last_token_as_unit() {
        let name = ColumnName::new("Relative reflectance %");
        assert_eq!(name.quantity(), "Relative reflectance");
        assert_eq!(name.unit(), "%");
    }

    #[test]
    fn single_token_has_no_unit() {
        let name = ColumnName::new("Index");
        assert_eq!(name.split(), ("Index", ""));
    }
}
