//! Configuration types for parameter sweeps, and the grid that holds results.

use rustc_hash::FxHashSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SweepError;
use crate::model::ParamField;

/// N-dimensional grid storage with flat backing array and stride-based indexing.
///
/// Stores values in row-major order where the last dimension varies fastest.
/// Deserialization recomputes the strides and rejects data whose length does
/// not match the shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepGrid<T> {
    /// The data stored in row-major order
    data: Vec<T>,
    /// Shape of each dimension (e.g., [3, 3] for a 3x3 grid)
    shape: Vec<usize>,
    /// Precomputed strides for index calculation
    strides: Vec<usize>,
}

impl<T> SweepGrid<T> {
    /// Create a grid from existing data. Data must be in row-major order.
    pub fn from_data(shape: Vec<usize>, data: Vec<T>) -> Option<Self> {
        let total_size: usize = shape.iter().product();
        if data.len() != total_size {
            return None;
        }
        let strides = compute_strides(&shape);
        Some(Self {
            data,
            shape,
            strides,
        })
    }

    /// Wrap data produced by walking `grid_indices(&shape)` in order
    pub(crate) fn from_row_major(shape: Vec<usize>, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), shape.iter().product::<usize>());
        let strides = compute_strides(&shape);
        Self {
            data,
            shape,
            strides,
        }
    }

    /// Get the shape of the grid
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the number of dimensions
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Get the total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Convert multi-dimensional indices to flat index
    pub fn flat_index(&self, indices: &[usize]) -> Option<usize> {
        if indices.len() != self.shape.len() {
            return None;
        }
        let mut flat = 0;
        for (i, (&idx, &size)) in indices.iter().zip(&self.shape).enumerate() {
            if idx >= size {
                return None;
            }
            flat += idx * self.strides[i];
        }
        Some(flat)
    }

    /// Get a reference to the value at the given indices
    pub fn get(&self, indices: &[usize]) -> Option<&T> {
        self.flat_index(indices).and_then(|i| self.data.get(i))
    }

    /// Get a reference to the underlying data
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Iterate over all indices in row-major order
    pub fn indices(&self) -> GridIndices {
        grid_indices(&self.shape)
    }

    /// Iterate over (indices, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (Vec<usize>, &T)> {
        self.indices().zip(self.data.iter())
    }

    /// Build a grid of the same shape by applying `f` to every value
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> SweepGrid<U> {
        SweepGrid {
            data: self.data.iter().map(f).collect(),
            shape: self.shape.clone(),
            strides: self.strides.clone(),
        }
    }

    /// Extract a 1D slice along a dimension at fixed indices for other dimensions.
    pub fn slice_1d(&self, dim: usize, fixed: &[Option<usize>]) -> Option<Vec<&T>> {
        if dim >= self.ndim() || fixed.len() != self.ndim() {
            return None;
        }
        // Fixed indices are required for every dimension except `dim`
        if fixed.iter().enumerate().any(|(i, f)| i != dim && f.is_none()) {
            return None;
        }

        let mut indices: Vec<usize> = fixed.iter().map(|f| f.unwrap_or(0)).collect();
        let mut result = Vec::with_capacity(self.shape[dim]);
        for idx in 0..self.shape[dim] {
            indices[dim] = idx;
            result.push(self.get(&indices)?);
        }
        Some(result)
    }

    /// Extract a 2D slice for two dimensions at fixed indices for others.
    /// Returns one row per index of `dim1`, each with one entry per index of `dim2`.
    pub fn slice_2d(
        &self,
        dim1: usize,
        dim2: usize,
        fixed: &[Option<usize>],
    ) -> Option<Vec<Vec<&T>>> {
        if dim1 >= self.ndim() || dim2 >= self.ndim() || dim1 == dim2 {
            return None;
        }
        if fixed.len() != self.ndim() {
            return None;
        }
        if fixed
            .iter()
            .enumerate()
            .any(|(i, f)| i != dim1 && i != dim2 && f.is_none())
        {
            return None;
        }

        let mut indices: Vec<usize> = fixed.iter().map(|f| f.unwrap_or(0)).collect();
        let mut rows = Vec::with_capacity(self.shape[dim1]);
        for i1 in 0..self.shape[dim1] {
            let mut row = Vec::with_capacity(self.shape[dim2]);
            for i2 in 0..self.shape[dim2] {
                indices[dim1] = i1;
                indices[dim2] = i2;
                row.push(self.get(&indices)?);
            }
            rows.push(row);
        }
        Some(rows)
    }
}

/// Serialized form of a grid; strides are derived, never trusted
#[derive(Deserialize)]
struct GridData<T> {
    data: Vec<T>,
    shape: Vec<usize>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SweepGrid<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = GridData::<T>::deserialize(deserializer)?;
        let expected: usize = raw.shape.iter().product();
        let found = raw.data.len();
        SweepGrid::from_data(raw.shape, raw.data).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "grid shape holds {expected} values, found {found}"
            ))
        })
    }
}

/// Compute strides for row-major order
fn compute_strides(shape: &[usize]) -> Vec<usize> {
    if shape.is_empty() {
        return Vec::new();
    }
    let mut strides = vec![1; shape.len()];
    for i in (0..shape.len() - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Iterate over every index tuple of a grid with the given shape, row-major
pub fn grid_indices(shape: &[usize]) -> GridIndices {
    GridIndices {
        shape: shape.to_vec(),
        current: vec![0; shape.len()],
        done: shape.is_empty() || shape.contains(&0),
    }
}

/// Iterator over all indices in a grid
pub struct GridIndices {
    shape: Vec<usize>,
    current: Vec<usize>,
    done: bool,
}

impl Iterator for GridIndices {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current.clone();

        // Increment indices (row-major: last dimension varies fastest)
        for i in (0..self.shape.len()).rev() {
            self.current[i] += 1;
            if self.current[i] < self.shape[i] {
                break;
            }
            self.current[i] = 0;
            if i == 0 {
                self.done = true;
            }
        }

        Some(result)
    }
}

/// One sweep dimension: a field and the additive deltas applied to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepParameter {
    pub field: ParamField,
    pub deltas: Vec<f64>,
}

impl SweepParameter {
    pub fn new(field: ParamField, deltas: Vec<f64>) -> Self {
        Self { field, deltas }
    }

    /// Deltas `-steps * step, ..., 0, ..., steps * step`
    pub fn symmetric(field: ParamField, step: f64, steps: usize) -> Self {
        let n = steps as i64;
        let deltas = (-n..=n).map(|i| i as f64 * step).collect();
        Self { field, deltas }
    }

    /// Get a descriptive label for display
    pub fn label(&self) -> String {
        format!("Δ {}", self.field.label())
    }
}

fn default_parallel() -> bool {
    true
}

/// Configuration for a sweep analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Dimensions to sweep, outermost first
    pub parameters: Vec<SweepParameter>,
    /// Evaluate cells on the rayon pool (ignored without the `parallel` feature)
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl SweepConfig {
    pub fn new(parameters: Vec<SweepParameter>) -> Self {
        Self {
            parameters,
            parallel: default_parallel(),
        }
    }

    /// Menus per day by shop tickets per day, each moved by -2, 0 and +2
    pub fn reference() -> Self {
        Self::new(vec![
            SweepParameter::new(ParamField::MenusPerDay, vec![-2.0, 0.0, 2.0]),
            SweepParameter::new(ParamField::ShopTicketsPerDay, vec![-2.0, 0.0, 2.0]),
        ])
    }

    #[must_use]
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Get the number of dimensions in the sweep
    pub fn ndim(&self) -> usize {
        self.parameters.len()
    }

    /// Get total number of sweep points
    pub fn total_points(&self) -> usize {
        self.parameters.iter().map(|p| p.deltas.len()).product()
    }

    /// Get the shape of the sweep grid (delta counts for each parameter)
    pub fn grid_shape(&self) -> Vec<usize> {
        self.parameters.iter().map(|p| p.deltas.len()).collect()
    }

    pub fn fields(&self) -> Vec<ParamField> {
        self.parameters.iter().map(|p| p.field).collect()
    }

    /// Get labels for all parameters
    pub fn labels(&self) -> Vec<String> {
        self.parameters.iter().map(SweepParameter::label).collect()
    }

    /// Check that the grid is non-empty, fields are distinct and deltas finite
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.parameters.is_empty() {
            return Err(SweepError::NoParameters);
        }
        let mut seen = FxHashSet::default();
        for param in &self.parameters {
            if !seen.insert(param.field) {
                return Err(SweepError::DuplicateField(param.field));
            }
            if param.deltas.is_empty() {
                return Err(SweepError::EmptyDeltas(param.field));
            }
            if let Some(&delta) = param.deltas.iter().find(|d| !d.is_finite()) {
                return Err(SweepError::NonFiniteDelta {
                    field: param.field,
                    delta,
                });
            }
        }
        Ok(())
    }
}
