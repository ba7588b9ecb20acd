pub mod input_interaction;

pub use input_interaction::{
    InputCaptureSet, InputInteractionPlugin, InverseShockwave, PointerWorld, SpawnRequest, UiHover,
};
