use crate::utils::parser::Triple;

pub struct DefaultsConfig {
    pub rotation: Triple,
    pub direction: Triple,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            rotation: [0.0, 0.0, 0.0],
            direction: [1.0, 0.0, 0.0],
        }
    }
}
