#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// frame rate for animations that don't follow the speed knob
    pub frames_per_second: u16,
    /// how often to re-read the speed knob while it is turned all the way down
    pub idle_poll_ms: u32,
    /// the speed knob's frequency at full scale
    pub max_speed_hz: f32,
    /// the slowest the speed knob will go
    pub max_frame_ms: u32,
    /// how long the test sweep holds each voxel
    pub sweep_ms: u32,
    /// scales the accelerometer's g into cube units
    pub liquid_gain: f32,
    /// half width of the liquid's surface. voxels further than this from the plane are fully lit or fully dark
    pub liquid_band: i16,
    /// the knob raises and lowers the liquid by (analog - center) / divisor
    pub liquid_level_divisor: i16,
    pub liquid_level_center: i16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frames_per_second: 50,
            idle_poll_ms: 100,
            max_speed_hz: 30.0,
            max_frame_ms: 500,
            sweep_ms: 2_000,
            liquid_gain: 64.0,
            liquid_band: 32,
            liquid_level_divisor: 5,
            liquid_level_center: 512,
        }
    }
}

impl Config {
    pub fn frame_ms(&self) -> u32 {
        1_000 / self.frames_per_second.max(1) as u32
    }
}
