/// Number of neuron nodes generated for the cluster
pub const NODE_COUNT: usize = 50;

/// Edge length of the cube the nodes are scattered in, centred on the origin
pub const NODE_SPREAD: f32 = 100.0;

/// Node sphere radius and tessellation
pub const NODE_RADIUS: f32 = 0.5;
pub const NODE_SPHERE_SEGMENTS: u32 = 16;

/// Node fill colour (sky blue) and opacity
pub const NODE_COLOUR: [u8; 3] = [0x87, 0xCE, 0xEB];
pub const NODE_OPACITY: f32 = 0.8;

/// Independent chance that any unordered node pair is joined by a connector
pub const CONNECTION_PROBABILITY: f64 = 0.05;

/// Connector line colour (white) and opacity
pub const CONNECTOR_COLOUR: [u8; 3] = [0xFF, 0xFF, 0xFF];
pub const CONNECTOR_OPACITY: f32 = 0.1;

/// Number of particles in the ambient swarm
pub const PARTICLE_COUNT: usize = 5000;

/// Edge length of the particle bounding cube, centred on the origin
pub const PARTICLE_SPREAD: f32 = 200.0;

/// Lower bound of each particle colour channel; channels span [min, 1.0)
pub const PARTICLE_COLOUR_MIN: f32 = 0.5;

pub const PARTICLE_OPACITY: f32 = 0.7;

/// Per-frame rotation increments in radians, [x, y]
pub const NEURON_ROTATION_RATE: [f32; 2] = [0.0005, 0.001];
pub const PARTICLE_ROTATION_RATE: [f32; 2] = [0.0002, 0.0004];

/// Exponential smoothing factor for camera easing toward the pointer
pub const CAMERA_SMOOTHING_FACTOR: f32 = 0.05;

/// Pointer offsets from the viewport centre are divided by this before use
pub const POINTER_DIVISOR: f32 = 5.0;

/// Upper bounds accepted from runtime configuration
pub const MAX_NODE_COUNT: usize = 1_000;
pub const MAX_PARTICLE_COUNT: usize = 1_000_000;
