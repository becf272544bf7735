use crate::geometry::transform::{Scalar, TransformFactory, deg_to_rad};
use nalgebra::{Matrix4, Vector3};

/// 🔥 **纯数据结构** - 宿主程序交给变换层的全部视图参数
///
/// 角度一律以度为单位保存，转换为矩阵时才换算成弧度。
/// 这里不做范围校验，非法值原样传给矩阵构造函数。
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSettings {
    // ===== 🔥 **物体旋转** =====
    /// 旋转轴，格式为"x,y,z"（应为单位向量，不会自动归一化）
    pub rotation_axis: String,
    /// 旋转角度（度）
    pub rotation_angle: Scalar,

    // ===== 🔥 **相机参数** =====
    /// 显式宽高比；为 None 时由 width/height 计算
    pub aspect_ratio: Option<Scalar>,
    /// 视口宽度（像素）
    pub width: usize,
    /// 视口高度（像素）
    pub height: usize,
    /// 垂直视场角（度）
    pub fov: Scalar,
    /// 近裁剪平面距离
    pub near: Scalar,
    /// 远裁剪平面距离
    pub far: Scalar,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            rotation_axis: "0,1,0".to_string(),
            rotation_angle: 0.0,
            aspect_ratio: None,
            width: 800,
            height: 600,
            fov: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl ViewSettings {
    /// 实际使用的宽高比
    pub fn aspect(&self) -> Scalar {
        self.aspect_ratio.unwrap_or(self.width as Scalar / self.height as Scalar)
    }

    /// 解析后的旋转轴
    pub fn axis(&self) -> Result<Vector3<Scalar>, String> {
        parse_vec3(&self.rotation_axis)
            .map_err(|e| format!("无效的旋转轴 '{}': {}", self.rotation_axis, e))
    }

    /// 当前设置对应的旋转矩阵
    pub fn rotation_matrix(&self) -> Result<Matrix4<Scalar>, String> {
        let axis = self.axis()?;
        Ok(TransformFactory::rotation(&axis, deg_to_rad(self.rotation_angle)))
    }

    /// 当前设置对应的透视投影矩阵
    pub fn projection_matrix(&self) -> Matrix4<Scalar> {
        TransformFactory::perspective(self.aspect(), deg_to_rad(self.fov), self.near, self.far)
    }

    /// 列出会让投影矩阵退化的参数，空列表表示参数正常
    pub fn degenerate_reasons(&self) -> Vec<String> {
        let mut reasons = Vec::new();
        let aspect = self.aspect();
        if aspect.is_nan() || aspect <= 0.0 {
            reasons.push(format!("宽高比 {} 不是正数", aspect));
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            reasons.push(format!("视场角 {} 不在 (0, 180) 度范围内", self.fov));
        }
        if !(self.near > 0.0 && self.near < self.far) {
            reasons.push(format!(
                "裁剪平面需满足 0 < near < far，当前 near = {}, far = {}",
                self.near, self.far
            ));
        }
        reasons
    }
}

/// 解析"x,y,z"格式的向量
pub fn parse_vec3(s: &str) -> Result<Vector3<Scalar>, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err("需要3个逗号分隔的值".to_string());
    }
    let mut values = [0.0; 3];
    for (value, part) in values.iter_mut().zip(&parts) {
        *value = part
            .trim()
            .parse::<Scalar>()
            .map_err(|e| format!("无效数字 '{}': {}", part, e))?;
    }
    Ok(Vector3::from(values))
}
