//! Configuration types for map conversion

/// Grid dimension the linear tile index is divided by to get its row
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowStride {
    /// `row = i / height`, the converter's historical behavior
    #[default]
    Height,
    /// `row = i / width`, plain row-major layout
    Width,
}

/// Tiled to hexabomb conversion settings
#[derive(Clone, Debug)]
pub struct ConvertConfig {
    /// Spaces per indentation level of the output document
    pub indent: usize,
    pub row_stride: RowStride,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            row_stride: RowStride::default(),
        }
    }
}

impl ConvertConfig {
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_row_stride(mut self, row_stride: RowStride) -> Self {
        self.row_stride = row_stride;
        self
    }
}
