pub mod log {
    pub use ard_log::*;
}

pub mod math {
    pub use ard_math::*;
}

pub mod material {
    pub use ard_gltf_material::*;
}
