/// Degrees of padding around a single-point track.
const MIN_SPAN_DEG: f64 = 0.01;
/// Fraction of the track span added on each side.
const PADDING_RATIO: f64 = 0.1;
const WORLD_X: [f64; 2] = [-180.0, 180.0];
const WORLD_Y: [f64; 2] = [-90.0, 90.0];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Device,
    From,
    To,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrentPosition {
    pub longitude: f64,
    pub latitude: f64,
    pub fix_time: String,
    pub coordinates: String,
    pub speed: String,
    pub course: String,
    pub altitude: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPanel {
    pub expanded: bool,
    pub device: String,
    pub device_label: Option<String>,
    pub from: String,
    pub to: String,
    pub from_valid: bool,
    pub to_valid: bool,
    pub period: Option<&'static str>,
    pub focus: FormField,
    pub can_show: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UiData {
    pub no_color: bool,
    /// Track as `(longitude, latitude)` pairs, in replay order.
    pub path: Vec<(f64, f64)>,
    pub record_count: usize,
    pub scrub_index: usize,
    pub playing: bool,
    pub loading: bool,
    pub current: Option<CurrentPosition>,
    pub panel: FilterPanel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl Default for MapBounds {
    fn default() -> Self {
        Self {
            x: WORLD_X,
            y: WORLD_Y,
        }
    }
}

impl MapBounds {
    /// Smallest box around the track, padded, clamped to the world.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "Map bounds are geographic degrees"
    )]
    pub fn fit(path: &[(f64, f64)]) -> Self {
        let mut points = path
            .iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite());
        let Some(&(first_x, first_y)) = points.next() else {
            return Self::default();
        };
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (first_x, first_x, first_y, first_y);
        for &(x, y) in points {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
        let pad_x = ((max_x - min_x) * PADDING_RATIO).max(MIN_SPAN_DEG);
        let pad_y = ((max_y - min_y) * PADDING_RATIO).max(MIN_SPAN_DEG);
        Self {
            x: [
                (min_x - pad_x).max(WORLD_X[0]),
                (max_x + pad_x).min(WORLD_X[1]),
            ],
            y: [
                (min_y - pad_y).max(WORLD_Y[0]),
                (max_y + pad_y).min(WORLD_Y[1]),
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiRenderData {
    pub ui: UiData,
    pub bounds: MapBounds,
}

impl From<&UiData> for UiRenderData {
    fn from(data: &UiData) -> Self {
        Self {
            bounds: MapBounds::fit(&data.path),
            ui: data.clone(),
        }
    }
}
