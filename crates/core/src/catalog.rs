//! Catalog module - immutable piece shapes with precomputed rotations
//!
//! Each [`Shape`] holds its four rotation layouts (North, East, South, West),
//! generated once from a base layout by successive 90° clockwise rotations.
//! Shapes live behind `Arc` so every piece spawned from the catalog shares them.
//!
//! # Text Format
//!
//! Whitespace is insignificant. A catalog is a sequence of blocks, each holding
//! the rows of one base layout as runs of `0`/`1` terminated by `;`:
//!
//! ```text
//! shape{
//!     010;
//!     111;
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use crate::grid::Grid;
use crate::types::Rotation;

/// The seven tetrominoes in catalog text form
pub const STANDARD_SHAPES: &str = "
shape{ 1111; }
shape{ 11; 11; }
shape{ 010; 111; }
shape{ 011; 110; }
shape{ 110; 011; }
shape{ 100; 111; }
shape{ 001; 111; }
";

/// Why a catalog was rejected. Shape indices are 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog holds no shapes
    Empty,
    /// The text does not follow the `shape{ROW;...}` format
    Syntax { shape: usize, reason: &'static str },
    /// Rows of a base layout differ in length
    RaggedRows { shape: usize },
    /// A layout has no occupied cell
    BlankShape { shape: usize },
    /// Rotation layouts of one shape differ in cell count
    UnequalAreas { shape: usize },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "catalog contains no shapes"),
            CatalogError::Syntax { shape, reason } => {
                write!(f, "shape #{}: syntax error: {}", shape, reason)
            }
            CatalogError::RaggedRows { shape } => {
                write!(f, "shape #{}: rows differ in length", shape)
            }
            CatalogError::BlankShape { shape } => {
                write!(f, "shape #{}: no occupied cells", shape)
            }
            CatalogError::UnequalAreas { shape } => {
                write!(f, "shape #{}: rotations differ in cell count", shape)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// One catalog entry: four rotation layouts of equal area
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rotations: [Grid; 4],
}

impl Shape {
    /// Generate all four rotations from a base layout.
    pub fn from_base(base: Grid) -> Self {
        let east = base.rotated_cw();
        let south = east.rotated_cw();
        let west = south.rotated_cw();
        Self {
            rotations: [base, east, south, west],
        }
    }

    /// Use explicitly supplied rotation layouts.
    ///
    /// Fails with index 0; [`PieceCatalog::new`] re-labels errors with the shape position.
    pub fn from_rotations(rotations: [Grid; 4]) -> Result<Self, CatalogError> {
        let shape = Self { rotations };
        shape.validate(0)?;
        Ok(shape)
    }

    fn validate(&self, index: usize) -> Result<(), CatalogError> {
        let area = self.rotations[0].count();
        if area == 0 {
            return Err(CatalogError::BlankShape { shape: index });
        }
        if self.rotations.iter().any(|g| g.count() != area) {
            return Err(CatalogError::UnequalAreas { shape: index });
        }
        Ok(())
    }

    /// Layout for a rotation state
    pub fn rotation(&self, rotation: Rotation) -> &Grid {
        &self.rotations[rotation.index()]
    }

    /// Occupied cell count, identical across rotations
    pub fn area(&self) -> usize {
        self.rotations[0].count()
    }
}

/// Non-empty, ordered, immutable set of shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceCatalog {
    shapes: Vec<Arc<Shape>>,
}

impl PieceCatalog {
    pub fn new(shapes: Vec<Shape>) -> Result<Self, CatalogError> {
        if shapes.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, shape) in shapes.iter().enumerate() {
            shape.validate(i)?;
        }
        Ok(Self {
            shapes: shapes.into_iter().map(Arc::new).collect(),
        })
    }

    /// Parse catalog text and expand every base layout into its rotations.
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        let data: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let mut rest = data.as_str();
        let mut shapes = Vec::new();

        while !rest.is_empty() {
            let index = shapes.len();
            let body = rest
                .strip_prefix("shape{")
                .ok_or(CatalogError::Syntax {
                    shape: index,
                    reason: "expected `shape{`",
                })?;
            let end = body.find('}').ok_or(CatalogError::Syntax {
                shape: index,
                reason: "missing closing `}`",
            })?;
            shapes.push(Shape::from_base(parse_layout(&body[..end], index)?));
            rest = &body[end + 1..];
        }

        Self::new(shapes)
    }

    /// The seven standard tetrominoes.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::parse(STANDARD_SHAPES)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Shape>> {
        self.shapes.get(index)
    }

    pub fn shapes(&self) -> &[Arc<Shape>] {
        &self.shapes
    }
}

fn parse_layout(body: &str, shape: usize) -> Result<Grid, CatalogError> {
    let Some(rows) = body.strip_suffix(';') else {
        return Err(CatalogError::Syntax {
            shape,
            reason: "rows must end with `;`",
        });
    };

    let mut parsed: Vec<Vec<bool>> = Vec::new();
    for row in rows.split(';') {
        if row.is_empty() {
            return Err(CatalogError::Syntax {
                shape,
                reason: "empty row",
            });
        }
        let cells = row
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(CatalogError::Syntax {
                    shape,
                    reason: "rows may only contain `0` and `1`",
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        parsed.push(cells);
    }

    Grid::from_rows(&parsed).ok_or(CatalogError::RaggedRows { shape })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_seven_tetrominoes() {
        let catalog = PieceCatalog::standard().unwrap();
        assert_eq!(catalog.len(), 7);
        assert!(catalog.shapes().iter().all(|s| s.area() == 4));
    }

    #[test]
    fn rotations_swap_dimensions() {
        let catalog = PieceCatalog::parse("shape{1111;}").unwrap();
        let i = catalog.get(0).unwrap();
        assert_eq!(i.rotation(Rotation::North).width(), 4);
        assert_eq!(i.rotation(Rotation::East).height(), 4);
        assert_eq!(i.rotation(Rotation::South).width(), 4);
        assert_eq!(i.rotation(Rotation::West).height(), 4);
    }

    #[test]
    fn four_rotations_return_to_base() {
        let catalog = PieceCatalog::standard().unwrap();
        for shape in catalog.shapes() {
            let west = shape.rotation(Rotation::West);
            assert_eq!(&west.rotated_cw(), shape.rotation(Rotation::North));
        }
    }

    #[test]
    fn parse_reports_errors() {
        assert_eq!(PieceCatalog::parse(" \n "), Err(CatalogError::Empty));
        assert_eq!(
            PieceCatalog::parse("shape{11;1;}"),
            Err(CatalogError::RaggedRows { shape: 0 })
        );
        assert_eq!(
            PieceCatalog::parse("shape{1;} shape{00;}"),
            Err(CatalogError::BlankShape { shape: 1 })
        );
        assert!(matches!(
            PieceCatalog::parse("shape{12;}"),
            Err(CatalogError::Syntax { shape: 0, .. })
        ));
        assert!(matches!(
            PieceCatalog::parse("shape{11;"),
            Err(CatalogError::Syntax { shape: 0, .. })
        ));
        assert!(matches!(
            PieceCatalog::parse("shape{11}"),
            Err(CatalogError::Syntax { shape: 0, .. })
        ));
    }

    #[test]
    fn explicit_rotations_must_share_area() {
        let one = Grid::from_rows(&[[true]]).unwrap();
        let two = Grid::from_rows(&[[true, true]]).unwrap();
        let err = Shape::from_rotations([one.clone(), one.clone(), two, one]).unwrap_err();
        assert_eq!(err, CatalogError::UnequalAreas { shape: 0 });
    }
}
