// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use seikyo_engine::models::GlossaryEntry;

#[allow(dead_code)]
pub fn generate_chapter_content(size: usize) -> String {
    let base = "大経言\n{設|たと}ひ我{仏|ほとけ}を得たらんに、十方の衆生、{至心|ししん}{信楽|しんぎょう}して\n\n乃至十念せん。\n已上\n又言\n{其|そ}の仏の{本願力|ほんがんりき}、名を聞きて往生せんと欲へ\n已上\n謹按{往相|おうそう}の回向を案ずるに、{覚|さと}りをひらく\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_glossary(size: usize) -> Vec<GlossaryEntry> {
    let mut entries = vec![
        GlossaryEntry::new("本願力", "ほんがんりき", "阿弥陀仏の救いのはたらき"),
        GlossaryEntry::new("至心信楽", "ししんしんぎょう", "第十八願の三心"),
        GlossaryEntry::new("往相", "おうそう", "浄土へ往く相"),
        GlossaryEntry::new("サトリ", "さとり", "迷いを離れること"),
    ];
    entries.extend((0..size).map(|i| GlossaryEntry::new(format!("語{i}"), "ご", "filler")));
    entries
}
