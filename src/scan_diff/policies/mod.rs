mod component_naming;

pub use component_naming::ComponentNaming;
