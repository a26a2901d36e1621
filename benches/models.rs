#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(i: usize) -> Self {
        Self {
            x: i as f64,
            y: (i % 7) as f64,
        }
    }

    /// key used for ordering, only x
    pub fn key(&self) -> f64 {
        self.x
    }
}

#[derive(Default, Copy, Clone, Debug)]
pub struct Value {
    _data_0: [u8; 24],
    _data_1: [u8; 24],
}

/// element stored in containers under benchmark
#[derive(Clone, Copy, Debug)]
pub struct Entry {
    pub point: Point,
    pub value: Value,
}

impl Entry {
    pub fn new(i: usize) -> Self {
        Self {
            point: Point::new(i),
            value: Value::default(),
        }
    }
}
