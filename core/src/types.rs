/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`, that is `(column, row)`.
pub type Coord2 = (Coord, Coord);

/// Converts `(x, y)` coordinates into the `[row, column]` index used by the grid storage.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Indices `value - 1 ..= value + 1` that fall inside `0..limit`.
fn span(value: Coord, limit: Coord) -> core::ops::RangeInclusive<Coord> {
    let last = limit.saturating_sub(1);
    value.saturating_sub(1)..=value.saturating_add(1).min(last)
}

/// The 3x3 block centred on `center`, clipped to `bounds` (`(columns, rows)`), row by row.
/// `center` must lie inside `bounds`.
pub fn block_around(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    let (x, y) = center;
    let (columns, rows) = bounds;
    span(y, rows).flat_map(move |ny| span(x, columns).map(move |nx| (nx, ny)))
}

/// The up-to-8 in-bounds neighbors of `center`.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    block_around(center, bounds).filter(move |&pos| pos != center)
}
