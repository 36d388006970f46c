use std::collections::VecDeque;

use mazer_core::{CellId, Connection, Direction, Grid};

use crate::error::PathError;

/// Sentinel stored for cells the search did not reach.
pub const UNREACHED: u32 = u32::MAX;

/// Single-source breadth-first distances over a grid's two-way links.
///
/// Only links present in both directions count as walkable; one-way links
/// are ignored. The map does not borrow the grid: methods that need the
/// links take it again and check that its shape matches.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DistanceMap {
    rows: usize,
    cols: usize,
    source: CellId,
    distance: Vec<u32>,
    farthest_distance: u32,
    farthest_id: CellId,
    target: Option<CellId>,
    path: Vec<CellId>,
}

impl DistanceMap {
    /// Run a breadth-first search from `source`.
    ///
    /// Neighbours are expanded in [`Direction::CARDINAL`] order and the
    /// first cell found at the greatest distance is kept as the farthest,
    /// so equal grids give equal maps.
    pub fn build<T>(grid: &Grid<T>, source: CellId) -> Result<Self, PathError> {
        let len = grid.len();
        if source >= len {
            return Err(PathError::NoSuchCell(source));
        }

        let mut distance = vec![UNREACHED; len];
        distance[source] = 0;
        let mut queue = VecDeque::with_capacity(len);
        queue.push_back(source);

        let mut farthest_distance = 0;
        let mut farthest_id = source;

        while let Some(ci) = queue.pop_front() {
            let nd = distance[ci] + 1;
            for d in Direction::CARDINAL {
                let Some(ni) = grid.neighbor_id(ci, d, Connection::Symmetric) else {
                    continue;
                };
                if distance[ni] != UNREACHED {
                    continue;
                }
                distance[ni] = nd;
                if nd > farthest_distance {
                    farthest_distance = nd;
                    farthest_id = ni;
                }
                queue.push_back(ni);
            }
        }

        log::debug!(
            "distance map from {source}: farthest cell {farthest_id} at {farthest_distance}"
        );
        Ok(Self {
            rows: grid.rows(),
            cols: grid.cols(),
            source,
            distance,
            farthest_distance,
            farthest_id,
            target: None,
            path: Vec::new(),
        })
    }

    #[inline]
    pub fn source(&self) -> CellId {
        self.source
    }

    /// Greatest distance reached.
    #[inline]
    pub fn farthest_distance(&self) -> u32 {
        self.farthest_distance
    }

    /// First cell reached at [`farthest_distance`](Self::farthest_distance).
    #[inline]
    pub fn farthest_id(&self) -> CellId {
        self.farthest_id
    }

    /// Cell the next [`find_path`](Self::find_path) will lead to, if one
    /// has been chosen.
    #[inline]
    pub fn target(&self) -> Option<CellId> {
        self.target
    }

    /// Steps from the source to `id`; `None` if `id` was not reached or
    /// names no cell. Changes nothing.
    #[inline]
    pub fn distance_at(&self, id: CellId) -> Option<u32> {
        self.distance.get(id).copied().filter(|&d| d != UNREACHED)
    }

    /// Like [`distance_at`](Self::distance_at), but also makes a valid
    /// `target` the destination of [`find_path`](Self::find_path).
    pub fn distance_to(&mut self, target: CellId) -> Option<u32> {
        if target < self.distance.len() {
            self.target = Some(target);
        }
        self.distance_at(target)
    }

    /// Reached cells and their distances, in id order.
    pub fn reached(&self) -> impl Iterator<Item = (CellId, u32)> + '_ {
        self.distance
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d != UNREACHED)
            .map(|(id, &d)| (id, d))
    }

    /// The last path found, source first. Empty until a search succeeds.
    #[inline]
    pub fn path(&self) -> &[CellId] {
        &self.path
    }

    /// Find the path to the chosen target, or to the farthest cell if none
    /// was chosen with [`distance_to`](Self::distance_to).
    pub fn find_path<T>(&mut self, grid: &Grid<T>) -> Result<&[CellId], PathError> {
        let target = self.target.unwrap_or(self.farthest_id);
        self.find_path_to(grid, target)
    }

    /// Rebuild the path from the source to `target` by stepping back
    /// through neighbours exactly one step closer to the source.
    ///
    /// On error the stored path is left empty. [`PathError::Inconsistent`]
    /// means the map was not built from `grid`'s current links.
    pub fn find_path_to<T>(
        &mut self,
        grid: &Grid<T>,
        target: CellId,
    ) -> Result<&[CellId], PathError> {
        self.path.clear();
        if (grid.rows(), grid.cols()) != (self.rows, self.cols) {
            return Err(PathError::ShapeMismatch {
                expected: (self.rows, self.cols),
                found: (grid.rows(), grid.cols()),
            });
        }
        let mut d = match self.distance.get(target) {
            None => return Err(PathError::NoSuchCell(target)),
            Some(&UNREACHED) => return Err(PathError::Unreachable { target }),
            Some(&d) => d,
        };
        self.target = Some(target);

        let mut rev = Vec::with_capacity(d as usize + 1);
        let mut current = target;
        rev.push(current);
        while d > 0 {
            let prev = Direction::CARDINAL.into_iter().find_map(|dir| {
                grid.neighbor_id(current, dir, Connection::Symmetric)
                    .filter(|&n| self.distance.get(n) == Some(&(d - 1)))
            });
            let Some(prev) = prev else {
                log::error!(
                    "distance map from {} has no step back from cell {current} at {d}",
                    self.source
                );
                return Err(PathError::Inconsistent { at: current, distance: d });
            };
            log::trace!("path step {d}: {prev} -> {current}");
            current = prev;
            d -= 1;
            rev.push(current);
        }

        rev.reverse();
        self.path = rev;
        Ok(&self.path)
    }
}

// A deserialized map must index like one built by `DistanceMap::build`.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DistanceMap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        #[derive(serde::Deserialize)]
        struct RawMap {
            rows: usize,
            cols: usize,
            source: CellId,
            distance: Vec<u32>,
            farthest_distance: u32,
            farthest_id: CellId,
            target: Option<CellId>,
            path: Vec<CellId>,
        }

        let raw = RawMap::deserialize(deserializer)?;
        let len = raw.distance.len();
        if raw.rows.checked_mul(raw.cols) != Some(len) {
            return Err(D::Error::custom(format_args!(
                "distance map: {}x{} map holds {len} distances",
                raw.rows, raw.cols
            )));
        }
        if raw.distance.get(raw.source) != Some(&0) {
            return Err(D::Error::custom(format_args!(
                "distance map: source {} is not at distance 0",
                raw.source
            )));
        }
        if raw.distance.get(raw.farthest_id) != Some(&raw.farthest_distance) {
            return Err(D::Error::custom(format_args!(
                "distance map: farthest cell {} is not at distance {}",
                raw.farthest_id, raw.farthest_distance
            )));
        }
        if let Some(t) = raw.target.filter(|&t| t >= len) {
            return Err(D::Error::custom(format_args!(
                "distance map: target {t} is out of range"
            )));
        }
        let stray = raw
            .path
            .iter()
            .find(|&&id| raw.distance.get(id).is_none_or(|&d| d == UNREACHED));
        if let Some(id) = stray {
            return Err(D::Error::custom(format_args!(
                "distance map: path visits unreached cell {id}"
            )));
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            source: raw.source,
            distance: raw.distance,
            farthest_distance: raw.farthest_distance,
            farthest_id: raw.farthest_id,
            target: raw.target,
            path: raw.path,
        })
    }
}
