//! 4-connected component labeling of a thresholded mask.

use crate::error::DetectError;
use crate::threshold::Mask;

/// Bounding box of one connected component. Coordinates are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub id: u32,
    pub min_x: u32,
    pub max_x: u32,
    pub min_y: u32,
    pub max_y: u32,
    pub pixel_count: usize,
}

impl Region {
    /// A region with inverted bounds, ready to be widened.
    fn empty(id: u32, width: u32, height: u32) -> Self {
        Self {
            id,
            min_x: width,
            max_x: 0,
            min_y: height,
            max_y: 0,
            pixel_count: 0,
        }
    }

    fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
        self.pixel_count += 1;
    }

    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }
}

/// Per-pixel region ids plus the regions themselves.
///
/// Label 0 means unassigned; `regions[i]` has id `i + 1`.
#[derive(Debug, Clone)]
pub struct Labeling {
    pub width: u32,
    pub height: u32,
    pub labels: Vec<u32>,
    pub regions: Vec<Region>,
}

impl Labeling {
    pub fn region_of(&self, x: u32, y: u32) -> Option<u32> {
        match self.labels[y as usize * self.width as usize + x as usize] {
            0 => None,
            id => Some(id),
        }
    }

    pub fn region(&self, id: u32) -> Option<&Region> {
        id.checked_sub(1).and_then(|i| self.regions.get(i as usize))
    }
}

/// Partitions the white pixels of `mask` into maximal 4-connected regions.
///
/// Scans row-major and grows each region with an explicit worklist. Opening
/// more than `max_regions` regions fails with a capacity error.
pub fn label_regions(mask: &Mask, max_regions: usize) -> Result<Labeling, DetectError> {
    let width = mask.width() as usize;
    let height = mask.height() as usize;
    let mut labels = vec![0u32; width * height];
    let mut labeled = vec![false; width * height];
    let mut regions: Vec<Region> = Vec::new();
    let mut stack: Vec<usize> = Vec::new();

    for start in 0..labels.len() {
        if labeled[start] {
            continue;
        }
        labeled[start] = true;
        if !mask.cells()[start].white {
            continue;
        }

        if regions.len() == max_regions {
            return Err(DetectError::CapacityExceeded {
                what: "connected regions",
                limit: max_regions,
            });
        }
        let id = regions.len() as u32 + 1;
        let mut region = Region::empty(id, mask.width(), mask.height());

        stack.push(start);
        while let Some(idx) = stack.pop() {
            let y = idx / width;
            let x = idx % width;
            labels[idx] = id;
            region.include(x as u32, y as u32);

            for (dx, dy) in [(-1isize, 0isize), (1, 0), (0, -1), (0, 1)] {
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx < 0 || ny < 0 {
                    continue;
                }
                let nxu = nx as usize;
                let nyu = ny as usize;
                if nxu >= width || nyu >= height {
                    continue;
                }
                let next_idx = nyu * width + nxu;
                if labeled[next_idx] || !mask.cells()[next_idx].white {
                    continue;
                }
                labeled[next_idx] = true;
                stack.push(next_idx);
            }
        }

        log::debug!(
            "region {id}: {} pixels in ({}, {})..=({}, {})",
            region.pixel_count,
            region.min_x,
            region.min_y,
            region.max_x,
            region.max_y
        );
        regions.push(region);
    }

    Ok(Labeling {
        width: mask.width(),
        height: mask.height(),
        labels,
        regions,
    })
}
