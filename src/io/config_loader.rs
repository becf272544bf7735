use crate::geometry::transform::Scalar;
use crate::io::view_settings::ViewSettings;
use log::debug;
use std::path::Path;
use toml::Value;

/// TOML配置管理器 - 统一处理视图配置的读写
pub struct TomlConfigLoader;

impl TomlConfigLoader {
    /// 从TOML文件加载完整配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ViewSettings, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("读取配置文件失败: {}", e))?;

        Self::load_from_content(&content)
    }

    /// 从TOML内容字符串加载配置
    pub fn load_from_content(content: &str) -> Result<ViewSettings, String> {
        let toml_value: Value =
            toml::from_str(content).map_err(|e| format!("解析TOML失败: {}", e))?;

        Self::parse_toml_to_settings(toml_value)
    }

    /// 保存配置到TOML文件
    pub fn save_to_file<P: AsRef<Path>>(settings: &ViewSettings, path: P) -> Result<(), String> {
        let toml_content = Self::settings_to_toml(settings);
        std::fs::write(path, toml_content).map_err(|e| format!("写入配置文件失败: {}", e))
    }

    /// 用默认设置生成示例配置文件
    pub fn create_example_config<P: AsRef<Path>>(path: P) -> Result<(), String> {
        Self::save_to_file(&ViewSettings::default(), path)
            .map_err(|e| format!("创建示例配置失败: {}", e))
    }

    // ===== TOML -> ViewSettings 转换 =====

    fn parse_toml_to_settings(toml: Value) -> Result<ViewSettings, String> {
        let mut settings = ViewSettings::default();

        // [rotation] 部分
        if let Some(rotation) = toml.get("rotation").and_then(|v| v.as_table()) {
            Self::parse_rotation_section(&mut settings, rotation)?;
        }

        // [camera] 部分
        if let Some(camera) = toml.get("camera").and_then(|v| v.as_table()) {
            Self::parse_camera_section(&mut settings, camera)?;
        }

        // [viewport] 部分
        if let Some(viewport) = toml.get("viewport").and_then(|v| v.as_table()) {
            Self::parse_viewport_section(&mut settings, viewport)?;
        }

        Ok(settings)
    }

    // ===== 各个section的解析方法 =====

    fn parse_rotation_section(
        settings: &mut ViewSettings,
        rotation: &toml::Table,
    ) -> Result<(), String> {
        if let Some(axis) = rotation.get("axis").and_then(|v| v.as_str()) {
            settings.rotation_axis = axis.to_string();
            // 提前解析一次，尽早报告格式错误
            settings.axis()?;
        }
        if let Some(angle) = get_scalar(rotation, "angle")? {
            settings.rotation_angle = angle;
        }
        Ok(())
    }

    fn parse_camera_section(
        settings: &mut ViewSettings,
        camera: &toml::Table,
    ) -> Result<(), String> {
        if let Some(fov) = get_scalar(camera, "fov")? {
            settings.fov = fov;
        }
        if let Some(near) = get_scalar(camera, "near")? {
            settings.near = near;
        }
        if let Some(far) = get_scalar(camera, "far")? {
            settings.far = far;
        }
        if let Some(aspect) = get_scalar(camera, "aspect")? {
            settings.aspect_ratio = Some(aspect);
        }
        Ok(())
    }

    fn parse_viewport_section(
        settings: &mut ViewSettings,
        viewport: &toml::Table,
    ) -> Result<(), String> {
        if let Some(width) = viewport.get("width").and_then(|v| v.as_integer()) {
            settings.width = usize::try_from(width)
                .map_err(|_| format!("无效的视口宽度: {}", width))?;
        }
        if let Some(height) = viewport.get("height").and_then(|v| v.as_integer()) {
            settings.height = usize::try_from(height)
                .map_err(|_| format!("无效的视口高度: {}", height))?;
        }
        Ok(())
    }

    // ===== ViewSettings -> TOML 转换 =====

    fn settings_to_toml(settings: &ViewSettings) -> String {
        let mut content = String::new();

        content.push_str("# 扫描视图配置文件\n");
        content.push_str("# 角度单位均为度\n\n");

        // [rotation] 部分
        content.push_str("[rotation]\n");
        content.push_str(&format!("axis = {}\n", toml_string(&settings.rotation_axis)));
        content.push_str(&format!("angle = {}\n", toml_float(settings.rotation_angle)));
        content.push('\n');

        // [camera] 部分
        content.push_str("[camera]\n");
        content.push_str(&format!("fov = {}\n", toml_float(settings.fov)));
        content.push_str(&format!("near = {}\n", toml_float(settings.near)));
        content.push_str(&format!("far = {}\n", toml_float(settings.far)));
        if let Some(aspect) = settings.aspect_ratio {
            content.push_str(&format!("aspect = {}\n", toml_float(aspect)));
        } else {
            content.push_str("# aspect = 1.333  # 可选：覆盖由视口尺寸计算的宽高比\n");
        }
        content.push('\n');

        // [viewport] 部分
        content.push_str("[viewport]\n");
        content.push_str(&format!("width = {}\n", settings.width));
        content.push_str(&format!("height = {}\n", settings.height));

        debug!("生成配置内容 {} 字节", content.len());
        content
    }
}

/// 按TOML语法写出浮点数，非有限值写作 nan / inf / -inf
fn toml_float(value: Scalar) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value == Scalar::INFINITY {
        "inf".to_string()
    } else if value == Scalar::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{:?}", value)
    }
}

/// 按TOML语法写出带引号和转义的字符串
fn toml_string(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}

/// 读取浮点数字段，整数也接受
fn get_scalar(table: &toml::Table, key: &str) -> Result<Option<Scalar>, String> {
    match table.get(key) {
        None => Ok(None),
        Some(Value::Float(f)) => Ok(Some(*f as Scalar)),
        Some(Value::Integer(i)) => Ok(Some(*i as Scalar)),
        Some(other) => Err(format!("字段 '{}' 需要数字，实际为 {}", key, other.type_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_gives_defaults() {
        let settings = TomlConfigLoader::load_from_content("").unwrap();
        assert_eq!(settings, ViewSettings::default());
    }

    #[test]
    fn parses_all_sections() {
        let content = r#"
            [rotation]
            axis = "0,0,1"
            angle = 90

            [camera]
            fov = 60.0
            near = 1
            far = 250.5
            aspect = 1.5

            [viewport]
            width = 1920
            height = 1080
        "#;
        let settings = TomlConfigLoader::load_from_content(content).unwrap();
        assert_eq!(settings.rotation_axis, "0,0,1");
        assert_eq!(settings.rotation_angle, 90.0);
        assert_eq!(settings.fov, 60.0);
        assert_eq!(settings.near, 1.0);
        assert_eq!(settings.far, 250.5);
        assert_eq!(settings.aspect_ratio, Some(1.5));
        assert_eq!(settings.width, 1920);
        assert_eq!(settings.height, 1080);
    }

    #[test]
    fn rejects_wrong_types_and_bad_axis() {
        assert!(TomlConfigLoader::load_from_content("[camera]\nfov = \"wide\"\n").is_err());
        assert!(TomlConfigLoader::load_from_content("[rotation]\naxis = \"1,2\"\n").is_err());
        assert!(TomlConfigLoader::load_from_content("[viewport]\nwidth = -4\n").is_err());
        assert!(TomlConfigLoader::load_from_content("not toml = = =").is_err());
    }

    #[test]
    fn degenerate_camera_is_kept() {
        let settings =
            TomlConfigLoader::load_from_content("[camera]\nnear = 10.0\nfar = 10.0\n").unwrap();
        assert_eq!(settings.near, settings.far);
    }

    #[test]
    fn generated_toml_loads_back() {
        let settings = ViewSettings {
            rotation_axis: "1,0,0".to_string(),
            rotation_angle: 30.0,
            aspect_ratio: Some(1.25),
            ..Default::default()
        };
        let content = TomlConfigLoader::settings_to_toml(&settings);
        assert_eq!(TomlConfigLoader::load_from_content(&content).unwrap(), settings);
    }

    #[test]
    fn non_finite_values_load_back() {
        let settings = ViewSettings {
            rotation_angle: f32::NAN,
            near: f32::NEG_INFINITY,
            far: f32::INFINITY,
            aspect_ratio: Some(f32::NAN),
            ..Default::default()
        };
        let content = TomlConfigLoader::settings_to_toml(&settings);
        let loaded = TomlConfigLoader::load_from_content(&content).unwrap();
        assert!(loaded.rotation_angle.is_nan());
        assert_eq!(loaded.near, f32::NEG_INFINITY);
        assert_eq!(loaded.far, f32::INFINITY);
        assert!(loaded.aspect_ratio.unwrap().is_nan());
    }

    #[test]
    fn axis_string_is_escaped() {
        let axis = "0,\"1\\,0";
        let settings = ViewSettings {
            rotation_axis: axis.to_string(),
            ..Default::default()
        };
        let content = TomlConfigLoader::settings_to_toml(&settings);
        let value: Value = toml::from_str(&content).unwrap();
        assert_eq!(value["rotation"]["axis"].as_str(), Some(axis));
    }
}
