use nalgebra::{Matrix4, Vector3, Vector4};

/// 整个库统一使用的标量类型（单精度）
pub type Scalar = f32;

/// 与 `Scalar` 同精度的数学常量，修改 `Scalar` 时需同步修改
pub use std::f32::consts as scalar_consts;

/// 变换矩阵工厂，提供创建旋转与透视投影矩阵的静态方法
///
/// 两个构造函数都先求出四个列向量，再按 `m[row][col] = 第 col 个向量的第 row 个分量`
/// 写入结果。输入不做任何校验：非法参数按 IEEE-754 规则产生 NaN 或无穷大。
pub struct TransformFactory;

impl TransformFactory {
    /// 创建绕任意轴旋转的变换矩阵（Rodrigues 公式）
    ///
    /// `axis` 必须由调用方保证为单位向量，这里不做归一化；非单位轴会得到带缩放的矩阵。
    /// 结果按行向量约定使用：点 `p` 变换为 `p * M`。
    /// 例如绕 z 轴旋转 π/2 时，`(1, 0, 0)` 变为 `(0, 1, 0)`。
    pub fn rotation(axis: &Vector3<Scalar>, angle_rad: Scalar) -> Matrix4<Scalar> {
        let c = angle_rad.cos();
        let s = angle_rad.sin();
        let t = 1.0 - c;
        let (ax, ay, az) = (axis.x, axis.y, axis.z);

        let x = Vector4::new(
            ax * ax + (1.0 - ax * ax) * c,
            ax * ay * t - az * s,
            ax * az * t + ay * s,
            0.0,
        );
        let y = Vector4::new(
            ax * ay * t + az * s,
            ay * ay + (1.0 - ay * ay) * c,
            ay * az * t - ax * s,
            0.0,
        );
        let z = Vector4::new(
            ax * az * t - ay * s,
            ay * az * t + ax * s,
            az * az + (1.0 - az * az) * c,
            0.0,
        );
        let w = Vector4::new(0.0, 0.0, 0.0, 1.0);

        assemble_columns(&x, &y, &z, &w)
    }

    /// 创建透视投影矩阵
    ///
    /// `aspect` 为宽高比，`fov_y_rad` 为垂直视场角（弧度），`near`/`far` 为裁剪平面距离。
    ///
    /// 不做校验或钳制：`aspect <= 0`、`fov_y_rad` 落在 `(0, π)` 之外或 `far == near`
    /// 时结果中会出现 NaN 或无穷大，由调用方负责避免。
    pub fn perspective(
        aspect: Scalar,
        fov_y_rad: Scalar,
        near: Scalar,
        far: Scalar,
    ) -> Matrix4<Scalar> {
        let y_scale = 1.0 / (fov_y_rad * 0.5).tan();
        let x_scale = y_scale / aspect;
        let z_range = far - near;
        let z_scale = -(far + near) / z_range;
        let wz_scale = -2.0 * far * near / z_range;

        let p = Vector4::new(x_scale, 0.0, 0.0, 0.0);
        let q = Vector4::new(0.0, y_scale, 0.0, 0.0);
        let r = Vector4::new(0.0, 0.0, z_scale, -1.0);
        let s = Vector4::new(0.0, 0.0, wz_scale, 0.0);

        assemble_columns(&p, &q, &r, &s)
    }
}

/// 用四个向量作为第 1..4 列拼出矩阵：第 k 个分量写到第 k 行
fn assemble_columns(
    c1: &Vector4<Scalar>,
    c2: &Vector4<Scalar>,
    c3: &Vector4<Scalar>,
    c4: &Vector4<Scalar>,
) -> Matrix4<Scalar> {
    // Matrix4::new 的参数按行主序排列 (m11, m12, ..., m44)
    Matrix4::new(
        c1.x, c2.x, c3.x, c4.x, // 第1行
        c1.y, c2.y, c3.y, c4.y, // 第2行
        c1.z, c2.z, c3.z, c4.z, // 第3行
        c1.w, c2.w, c3.w, c4.w, // 第4行
    )
}

/// 角度转弧度：`degrees * (π / 180)`，不做角度回绕
pub fn deg_to_rad(degrees: Scalar) -> Scalar {
    degrees * (scalar_consts::PI / 180.0)
}

/// 弧度转角度
pub fn rad_to_deg(radians: Scalar) -> Scalar {
    radians * (180.0 / scalar_consts::PI)
}
