/// View layer: the 3D scatter scene and the 2D training-curve panels.
pub mod curves;
pub mod scatter;
