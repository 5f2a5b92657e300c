//! 参数注册表测试
//!
//! 测试参数注册、查找、排序列表与批量生成

use can_composer::core::params::{
    ParamTemplate, ParamType, ParameterRegistry,
};
use can_composer::ComposerError;

#[test]
fn test_register_and_lookup() {
    let mut registry = ParameterRegistry::new();
    registry
        .register(
            "SOC",
            "State of Charge (%)",
            ParamType::UInt8,
            "%",
            1.0,
        )
        .unwrap();

    let param = registry.lookup("SOC").unwrap();
    assert_eq!(param.param_type, ParamType::UInt8);
    assert_eq!(param.unit, "%");
    assert_eq!(param.scale, 1.0);
}

#[test]
fn test_duplicate_name_rejected() {
    let mut registry = ParameterRegistry::new();
    registry
        .register(
            "SOC",
            "State of Charge (%)",
            ParamType::UInt8,
            "%",
            1.0,
        )
        .unwrap();

    // 重名注册必须失败且不覆盖
    let result = registry.register(
        "SOC",
        "Something else",
        ParamType::Int8,
        "",
        2.0,
    );
    assert!(matches!(
        result,
        Err(ComposerError::DuplicateParameter { ref name })
            if name == "SOC"
    ));

    let param = registry.lookup("SOC").unwrap();
    assert_eq!(
        param.description,
        "State of Charge (%)"
    );
}

#[test]
fn test_invalid_scale_rejected() {
    let mut registry = ParameterRegistry::new();

    assert!(matches!(
        registry.register(
            "Voltage",
            "Pack Voltage (V)",
            ParamType::UInt16,
            "V",
            0.0,
        ),
        Err(ComposerError::InvalidScale { .. })
    ));

    assert!(matches!(
        registry.register(
            "Voltage",
            "Pack Voltage (V)",
            ParamType::UInt16,
            "V",
            -0.1,
        ),
        Err(ComposerError::InvalidScale { .. })
    ));
}

#[test]
fn test_empty_name_reserved() {
    let mut registry = ParameterRegistry::new();

    // 空名称为保留项，不可注册
    assert!(matches!(
        registry.register(
            "",
            "Custom",
            ParamType::HexLiteral,
            "",
            1.0,
        ),
        Err(ComposerError::InvalidName)
    ));

    // 查找与包含判断都不暴露保留条目
    assert!(matches!(
        registry.lookup(""),
        Err(ComposerError::NotFound { .. })
    ));
    assert!(!registry.contains(""));
}

#[test]
fn test_lookup_missing() {
    let registry = ParameterRegistry::new();
    assert!(matches!(
        registry.lookup("Missing"),
        Err(ComposerError::NotFound { ref name })
            if name == "Missing"
    ));
}

#[test]
fn test_list_sorted_order() {
    let mut registry = ParameterRegistry::new();
    registry
        .register(
            "beta",
            "b",
            ParamType::UInt8,
            "",
            1.0,
        )
        .unwrap();
    registry
        .register(
            "Zeta",
            "z",
            ParamType::UInt8,
            "",
            1.0,
        )
        .unwrap();
    registry
        .register(
            "alpha",
            "a",
            ParamType::UInt8,
            "",
            1.0,
        )
        .unwrap();

    // 区分大小写的升序：大写字母排在小写之前
    let names: Vec<&str> = registry
        .list_sorted()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Zeta", "alpha", "beta"]);
}

#[test]
fn test_generate_sequential_fills_gaps() {
    let mut registry = ParameterRegistry::new();
    registry
        .register(
            "Cell_2",
            "Hand-made entry",
            ParamType::UInt16,
            "V",
            0.001,
        )
        .unwrap();

    let created = registry
        .generate_sequential(
            "Cell",
            4,
            &ParamTemplate::cell_voltage(),
        )
        .unwrap();

    // Cell_2 已存在被跳过，其余补齐
    assert_eq!(created, 3);
    assert!(registry.contains("Cell_1"));
    assert!(registry.contains("Cell_4"));

    // 已存在条目不被覆盖
    assert_eq!(
        registry.lookup("Cell_2").unwrap().description,
        "Hand-made entry"
    );

    // 再次生成为幂等操作
    let again = registry
        .generate_sequential(
            "Cell",
            4,
            &ParamTemplate::cell_voltage(),
        )
        .unwrap();
    assert_eq!(again, 0);
}

#[test]
fn test_generated_descriptions() {
    let mut registry = ParameterRegistry::new();
    registry
        .generate_sequential(
            "Temp",
            2,
            &ParamTemplate::temp_sensor(),
        )
        .unwrap();

    let param = registry.lookup("Temp_2").unwrap();
    assert_eq!(
        param.description,
        "Temperature Sensor 2 (°C)"
    );
    assert_eq!(param.param_type, ParamType::Int8);
}

#[test]
fn test_default_parameter_table() {
    let registry = ParameterRegistry::with_defaults();

    assert!(registry.contains("SOC"));
    assert!(registry.contains("Highest_Cell_V"));
    assert!(registry.contains("Temp_4"));

    let current = registry.lookup("Current").unwrap();
    assert_eq!(current.param_type, ParamType::Int16);
    assert_eq!(current.scale, 0.1);
    assert_eq!(current.unit, "A");
}
