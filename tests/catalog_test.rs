//! 报文目录测试
//!
//! 测试目录增删改查、结构化导出与原子导入

use can_composer::core::catalog::{
    CatalogOptions, MessageCatalog, MessageRecord,
};
use can_composer::core::params::ParameterRegistry;
use can_composer::{
    ByteSlot, ComposerError, MessageDefinition,
};

fn sample_def(id: &str, name: &str) -> MessageDefinition {
    MessageDefinition {
        id: id.to_string(),
        extended: false,
        dlc: 2,
        name: name.to_string(),
        remote_request: false,
        periodic: true,
        period_ms: 1000,
        bytes: vec![
            ByteSlot::ParamRef("SOC".to_string()),
            ByteSlot::Literal(0),
        ],
    }
}

fn sample_record(
    id: &str,
    name: &str,
) -> MessageRecord {
    MessageRecord {
        id: id.to_string(),
        dlc: 2,
        name: name.to_string(),
        periodic: true,
        period_ms: 500,
        data_bytes: vec![
            "SOC".to_string(),
            "00".to_string(),
        ],
    }
}

#[test]
fn test_append_returns_index() {
    let registry = ParameterRegistry::with_defaults();
    let mut catalog = MessageCatalog::new();

    let first = catalog
        .append(
            sample_def("0x680", "BMS_Status"),
            &registry,
        )
        .unwrap();
    let second = catalog
        .append(
            sample_def("0x681", "Cell_Voltages"),
            &registry,
        )
        .unwrap();

    assert_eq!(first, 0);
    assert_eq!(second, 1);
    assert_eq!(catalog.len(), 2);
}

#[test]
fn test_append_validates_slot_count() {
    let registry = ParameterRegistry::with_defaults();
    let mut catalog = MessageCatalog::new();

    // dlc 与槽数不符必须整体拒绝
    let mut def = sample_def("0x680", "BMS_Status");
    def.dlc = 3;

    assert!(matches!(
        catalog.append(def, &registry),
        Err(ComposerError::Validation { .. })
    ));
    assert!(catalog.is_empty());
}

#[test]
fn test_append_rejects_unknown_parameter() {
    let registry = ParameterRegistry::with_defaults();
    let mut catalog = MessageCatalog::new();

    let mut def = sample_def("0x680", "BMS_Status");
    def.bytes[0] =
        ByteSlot::ParamRef("Nonexistent".to_string());

    assert!(matches!(
        catalog.append(def, &registry),
        Err(ComposerError::Validation { .. })
    ));
    assert!(catalog.is_empty());
}

#[test]
fn test_append_rejects_standard_id_overflow() {
    let registry = ParameterRegistry::with_defaults();
    let mut catalog = MessageCatalog::new();

    // 标准帧 ID 超过 0x7FF
    let def = sample_def("0x800", "Overflow");
    assert!(matches!(
        catalog.append(def, &registry),
        Err(ComposerError::Validation { .. })
    ));

    // 扩展帧允许同一数值
    let mut def = sample_def("0x800", "Extended_OK");
    def.extended = true;
    assert!(catalog.append(def, &registry).is_ok());
}

#[test]
fn test_replace_at() {
    let registry = ParameterRegistry::with_defaults();
    let mut catalog = MessageCatalog::new();
    catalog
        .append(
            sample_def("0x680", "BMS_Status"),
            &registry,
        )
        .unwrap();

    catalog
        .replace_at(
            0,
            sample_def("0x690", "Renamed"),
            &registry,
        )
        .unwrap();
    assert_eq!(catalog.list()[0].name, "Renamed");

    assert!(matches!(
        catalog.replace_at(
            5,
            sample_def("0x691", "Ghost"),
            &registry,
        ),
        Err(ComposerError::IndexOutOfRange {
            index: 5,
            len: 1,
        })
    ));
}

#[test]
fn test_replace_validates_before_commit() {
    let registry = ParameterRegistry::with_defaults();
    let mut catalog = MessageCatalog::new();
    catalog
        .append(
            sample_def("0x680", "BMS_Status"),
            &registry,
        )
        .unwrap();

    let mut bad = sample_def("0x690", "Broken");
    bad.name = String::new();
    assert!(catalog
        .replace_at(0, bad, &registry)
        .is_err());

    // 原条目保持不变
    assert_eq!(catalog.list()[0].name, "BMS_Status");
}

#[test]
fn test_remove_at() {
    let registry = ParameterRegistry::with_defaults();
    let mut catalog = MessageCatalog::new();
    catalog
        .append(
            sample_def("0x680", "BMS_Status"),
            &registry,
        )
        .unwrap();

    let removed = catalog.remove_at(0).unwrap();
    assert_eq!(removed.name, "BMS_Status");
    assert!(catalog.is_empty());

    assert!(matches!(
        catalog.remove_at(0),
        Err(ComposerError::IndexOutOfRange {
            index: 0,
            len: 0,
        })
    ));
}

#[test]
fn test_export_record_shape() {
    let registry = ParameterRegistry::with_defaults();
    let mut catalog = MessageCatalog::new();

    catalog
        .append(
            sample_def("0x680", "BMS_Status"),
            &registry,
        )
        .unwrap();
    let mut on_demand =
        sample_def("0x681", "Diagnostics");
    on_demand.periodic = false;
    on_demand.period_ms = 1234;
    catalog.append(on_demand, &registry).unwrap();

    let records = catalog.export_all();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "0x680");
    assert_eq!(
        records[0].data_bytes,
        vec!["SOC".to_string(), "00".to_string()]
    );

    // 非周期报文导出周期为 0
    assert!(!records[1].periodic);
    assert_eq!(records[1].period_ms, 0);
}

#[test]
fn test_import_replace_all_atomic() {
    let registry = ParameterRegistry::with_defaults();
    let mut catalog = MessageCatalog::new();
    catalog
        .append(
            sample_def("0x680", "BMS_Status"),
            &registry,
        )
        .unwrap();
    let before = catalog.list().to_vec();

    // 第 3 条（0 起）dlc 为 8 但只有 5 个字段
    let mut records = vec![
        sample_record("0x100", "Msg_0"),
        sample_record("0x101", "Msg_1"),
        sample_record("0x102", "Msg_2"),
        sample_record("0x103", "Msg_3"),
    ];
    records[3].dlc = 8;
    records[3].data_bytes = vec![
        "00".to_string(),
        "01".to_string(),
        "02".to_string(),
        "03".to_string(),
        "04".to_string(),
    ];

    let result =
        catalog.import_replace_all(&records, &registry);
    match result {
        Err(ComposerError::Validation {
            field, ..
        }) => {
            assert_eq!(field, "record[3]");
        }
        other => panic!(
            "expected validation error, got {:?}",
            other
        ),
    }

    // 目录与调用前完全一致
    assert_eq!(catalog.list(), before.as_slice());
}

#[test]
fn test_import_replace_all_success() {
    let registry = ParameterRegistry::with_defaults();
    let mut catalog = MessageCatalog::new();
    catalog
        .append(
            sample_def("0x680", "Old_Entry"),
            &registry,
        )
        .unwrap();

    let records = vec![
        sample_record("0x100", "Msg_0"),
        sample_record("0x101", "Msg_1"),
    ];
    catalog
        .import_replace_all(&records, &registry)
        .unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.list()[0].name, "Msg_0");
    assert_eq!(catalog.list()[1].id, "0x101");
}

#[test]
fn test_duplicate_ids_allowed_by_default() {
    let registry = ParameterRegistry::with_defaults();
    let mut catalog = MessageCatalog::new();

    catalog
        .append(sample_def("0x680", "A"), &registry)
        .unwrap();
    catalog
        .append(sample_def("0x680", "B"), &registry)
        .unwrap();
    assert_eq!(catalog.len(), 2);
}

#[test]
fn test_strict_mode_rejects_duplicate_ids() {
    let registry = ParameterRegistry::with_defaults();
    let mut catalog =
        MessageCatalog::with_options(CatalogOptions {
            reject_duplicate_ids: true,
        });

    catalog
        .append(sample_def("0x680", "A"), &registry)
        .unwrap();

    // 数值相同即冲突，原文写法不同也一样
    assert!(matches!(
        catalog
            .append(sample_def("0x0680", "B"), &registry),
        Err(ComposerError::Validation { .. })
    ));

    // 替换自身位置时允许保留同一 ID
    assert!(catalog
        .replace_at(
            0,
            sample_def("0x680", "A2"),
            &registry,
        )
        .is_ok());

    // 批量导入同样拒绝重复 ID
    let records = vec![
        sample_record("0x200", "M0"),
        sample_record("0x200", "M1"),
    ];
    assert!(matches!(
        catalog
            .import_replace_all(&records, &registry),
        Err(ComposerError::Validation { .. })
    ));
}
