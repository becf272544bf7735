// geometry/mod.rs
// 导出变换矩阵相关模块
pub mod transform;
