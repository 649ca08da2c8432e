//! Built-in reference dataset.
//!
//! Two physiotherapy cases with their answer keys, so the quiz is usable
//! without any catalog file.

use crate::catalog::Catalog;
use crate::model::{AssessmentItem, Case, CaseSolution};

fn case(id: &str, title: &str, description: &str) -> Case {
    Case {
        id: id.into(),
        title: title.into(),
        description: description.into(),
    }
}

fn item(id: &str, name: &str, category: &str) -> AssessmentItem {
    AssessmentItem {
        id: id.into(),
        name: name.into(),
        category: category.into(),
    }
}

fn solution(
    case_id: &str,
    item_id: &str,
    weight: u32,
    must_have: bool,
    rationale: &str,
) -> CaseSolution {
    CaseSolution {
        case_id: case_id.into(),
        item_id: item_id.into(),
        priority_weight: weight,
        must_have,
        rationale: rationale.into(),
    }
}

/// The catalog shipped with the binary.
pub fn builtin_catalog() -> Catalog {
    Catalog {
        name: "理学療法推論：評価項目ゲーム".into(),
        description: "症例に対して必要な評価項目を選択する".into(),
        cases: builtin_cases(),
        items: builtin_items(),
        solutions: builtin_solutions(),
    }
}

fn builtin_cases() -> Vec<Case> {
    vec![
        case(
            "case-1",
            "症例A: 70代女性 大腿骨頸部骨折",
            "70代女性。転倒により右大腿骨頸部骨折を受傷。人工骨頭置換術後1週経過。既往に高血圧あり。認知機能は保たれている。本日の理学療法評価を実施する。",
        ),
        case(
            "case-2",
            "症例B: 60代男性 脳梗塞左片麻痺",
            "60代男性。右中大脳動脈領域の脳梗塞により左片麻痺を呈する。発症後4週経過。回復期リハビリテーション病棟入院中。座位保持は自立しているが、立ち上がり動作に介助を要する。",
        ),
    ]
}

fn builtin_items() -> Vec<AssessmentItem> {
    vec![
        item("eval-1", "身長・体重", "形態測定"),
        item("eval-2", "四肢周径", "形態測定"),
        item("eval-3", "四肢長", "形態測定"),
        item("eval-4", "ROM（股関節）", "関節可動域"),
        item("eval-5", "ROM（膝関節）", "関節可動域"),
        item("eval-6", "ROM（足関節）", "関節可動域"),
        item("eval-7", "ROM（上肢）", "関節可動域"),
        item("eval-8", "MMT（下肢）", "筋力"),
        item("eval-9", "MMT（上肢）", "筋力"),
        item("eval-10", "握力", "筋力"),
        item("eval-11", "表在感覚", "感覚"),
        item("eval-12", "深部感覚", "感覚"),
        item("eval-13", "NRS/VAS（疼痛）", "疼痛"),
        item("eval-14", "血圧・脈拍", "循環・呼吸"),
        item("eval-15", "SpO2", "循環・呼吸"),
        item("eval-16", "聴診", "循環・呼吸"),
        item("eval-17", "FBS (Berg Balance Scale)", "バランス"),
        item("eval-18", "TUG", "バランス"),
        item("eval-19", "10m歩行テスト", "歩行"),
        item("eval-20", "6分間歩行テスト", "歩行"),
        item("eval-21", "FIM", "ADL"),
        item("eval-22", "Barthel Index", "ADL"),
        item("eval-23", "HDS-R", "精神・認知"),
        item("eval-24", "MMSE", "精神・認知"),
        item("eval-25", "Brunnstrom Recovery Stage", "運動麻痺"),
        item("eval-26", "SIAS", "運動麻痺"),
    ]
}

fn builtin_solutions() -> Vec<CaseSolution> {
    vec![
        // case-1: femoral neck fracture, one week post hemiarthroplasty
        solution("case-1", "eval-4", 5, true, "術後の可動域制限確認のため必須"),
        solution("case-1", "eval-5", 3, false, "隣接関節への影響確認"),
        solution("case-1", "eval-8", 5, true, "術後の筋力低下確認"),
        solution("case-1", "eval-13", 5, true, "術後疼痛の管理"),
        solution("case-1", "eval-14", 4, true, "リスク管理として必須"),
        solution("case-1", "eval-19", 4, false, "歩行能力の評価"),
        solution("case-1", "eval-21", 3, false, "ADL能力の把握"),
        // case-2: left hemiparesis, four weeks after stroke
        solution("case-2", "eval-25", 5, true, "麻痺の回復段階評価に必須"),
        solution("case-2", "eval-11", 4, true, "感覚障害の有無確認"),
        solution("case-2", "eval-12", 4, true, "運動失調との鑑別"),
        solution("case-2", "eval-4", 3, false, "拘縮予防"),
        solution("case-2", "eval-6", 3, false, "尖足予防"),
        solution("case-2", "eval-17", 4, false, "バランス能力評価"),
        solution("case-2", "eval-21", 5, true, "病棟生活の自立度評価"),
    ]
}
