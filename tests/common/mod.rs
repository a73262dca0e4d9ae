#![allow(dead_code)]

use std::collections::VecDeque;

use sonar_light_composer::{DistanceSensor, PixelStrip, Rgb, SensorError};

/// Sensor that replays a fixed script, then times out
#[derive(Debug, Default)]
pub struct ScriptedSensor {
    readings: VecDeque<Result<f32, SensorError>>,
    pub reads: usize,
}

impl ScriptedSensor {
    pub fn new(readings: &[f32]) -> Self {
        Self {
            readings: readings.iter().copied().map(Ok).collect(),
            reads: 0,
        }
    }

    /// Drop what is left of the script and continue with `readings`
    pub fn replace(&mut self, readings: &[f32]) {
        self.readings = readings.iter().copied().map(Ok).collect();
    }

    pub fn push(&mut self, reading: Result<f32, SensorError>) {
        self.readings.push_back(reading);
    }
}

impl DistanceSensor for ScriptedSensor {
    fn read_distance(&mut self) -> Result<f32, SensorError> {
        self.reads += 1;
        self.readings
            .pop_front()
            .unwrap_or(Err(SensorError::Timeout))
    }
}

/// Strip that records everything written to it
#[derive(Debug, Default)]
pub struct RecordingStrip {
    pub frames: Vec<Vec<Rgb>>,
    pub brightness: Vec<f32>,
}

impl RecordingStrip {
    pub fn last_brightness(&self) -> Option<f32> {
        self.brightness.last().copied()
    }
}

impl PixelStrip for RecordingStrip {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }

    fn set_brightness(&mut self, brightness: f32) {
        self.brightness.push(brightness);
    }
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}
