//! 物体扫描可视化使用的 3D 变换辅助库：
//! 轴角旋转矩阵、透视投影矩阵，以及角度与弧度的换算。

pub mod geometry;
pub mod io;

pub use geometry::transform::{Scalar, TransformFactory, deg_to_rad, rad_to_deg};
pub use io::view_settings::ViewSettings;
