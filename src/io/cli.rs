use crate::geometry::transform::Scalar;
use crate::io::config_loader::TomlConfigLoader;
use crate::io::view_settings::ViewSettings;
use clap::Parser;
use log::{info, warn};

/// 🔥 **极简CLI** - 读取配置文件并按需覆盖单个参数
#[derive(Parser, Debug)]
#[command(name = "scan-math")]
#[command(about = "计算扫描视图的旋转矩阵与透视投影矩阵")]
pub struct SimpleCli {
    /// 📁 配置文件路径（TOML格式）
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// 📋 把默认配置写到指定文件后退出
    #[arg(long, value_name = "FILE")]
    pub write_example: Option<String>,

    /// 旋转轴，格式为"x,y,z"
    #[arg(long, allow_hyphen_values = true)]
    pub axis: Option<String>,

    /// 旋转角度（度）
    #[arg(long, allow_hyphen_values = true)]
    pub angle: Option<Scalar>,

    /// 垂直视场角（度）
    #[arg(long, allow_hyphen_values = true)]
    pub fov: Option<Scalar>,

    /// 宽高比
    #[arg(long, allow_hyphen_values = true)]
    pub aspect: Option<Scalar>,

    /// 近裁剪平面距离
    #[arg(long, allow_hyphen_values = true)]
    pub near: Option<Scalar>,

    /// 远裁剪平面距离
    #[arg(long, allow_hyphen_values = true)]
    pub far: Option<Scalar>,
}

/// CLI处理结果
#[derive(Debug)]
pub enum CliAction {
    /// 已写出示例配置，无需继续
    ExampleWritten(String),
    /// 使用这些设置计算矩阵
    Compute(ViewSettings),
}

impl SimpleCli {
    /// 🔥 **处理CLI参数**：先加载配置文件，再应用命令行覆盖
    pub fn process(self) -> Result<CliAction, String> {
        if let Some(path) = &self.write_example {
            TomlConfigLoader::create_example_config(path)?;
            info!("已创建示例配置: {}", path);
            return Ok(CliAction::ExampleWritten(path.clone()));
        }

        let mut settings = if let Some(config_path) = &self.config {
            info!("加载配置文件: {}", config_path);
            TomlConfigLoader::load_from_file(config_path)
                .map_err(|e| format!("配置文件加载失败: {}", e))?
        } else {
            info!("使用默认设置");
            ViewSettings::default()
        };

        self.apply_overrides(&mut settings)?;
        for reason in settings.degenerate_reasons() {
            warn!("投影参数退化，结果可能包含 NaN/Inf: {}", reason);
        }
        Ok(CliAction::Compute(settings))
    }

    fn apply_overrides(&self, settings: &mut ViewSettings) -> Result<(), String> {
        if let Some(axis) = &self.axis {
            settings.rotation_axis = axis.clone();
            settings.axis()?;
        }
        if let Some(angle) = self.angle {
            settings.rotation_angle = angle;
        }
        if let Some(fov) = self.fov {
            settings.fov = fov;
        }
        if let Some(aspect) = self.aspect {
            settings.aspect_ratio = Some(aspect);
        }
        if let Some(near) = self.near {
            settings.near = near;
        }
        if let Some(far) = self.far {
            settings.far = far;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let cli = SimpleCli::parse_from([
            "scan-math", "--axis", "0,0,1", "--angle", "-45", "--fov", "60", "--far", "50",
        ]);
        let CliAction::Compute(settings) = cli.process().unwrap() else {
            panic!("expected settings");
        };
        assert_eq!(settings.rotation_axis, "0,0,1");
        assert_eq!(settings.rotation_angle, -45.0);
        assert_eq!(settings.fov, 60.0);
        assert_eq!(settings.far, 50.0);
        assert_eq!(settings.near, ViewSettings::default().near);
    }

    #[test]
    fn negative_camera_overrides_are_kept_and_reported() {
        let cli = SimpleCli::parse_from([
            "scan-math", "--near", "-1", "--aspect", "-2", "--fov", "-30", "--far", "-5",
        ]);
        let CliAction::Compute(settings) = cli.process().unwrap() else {
            panic!("expected settings");
        };
        assert_eq!(settings.near, -1.0);
        assert_eq!(settings.far, -5.0);
        assert_eq!(settings.fov, -30.0);
        assert_eq!(settings.aspect_ratio, Some(-2.0));
        assert_eq!(settings.degenerate_reasons().len(), 3);
    }

    #[test]
    fn invalid_axis_override_fails() {
        let cli = SimpleCli::parse_from(["scan-math", "--axis", "1;0;0"]);
        assert!(cli.process().is_err());
    }

    #[test]
    fn missing_config_file_fails() {
        let cli = SimpleCli::parse_from(["scan-math", "--config", "/nonexistent/view.toml"]);
        let err = cli.process().unwrap_err();
        assert!(err.contains("配置文件加载失败"));
    }
}
