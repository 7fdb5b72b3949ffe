//! Heuristic extraction of material items from construction-document text.
//!
//! A fixed, ordered list of domain patterns is applied to each line of the
//! transcript; the first pattern that matches claims the line. Lines that
//! match nothing are dropped.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One row of the generated materials list, derived from a single source line.
///
/// `unidade` and `quantidade` are always left blank: the patterns capture
/// numbers (amperage, diameters) but no inference is done on them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialRecord {
    pub item: String,
    pub especificacao: String,
    pub unidade: String,
    pub quantidade: String,
}

/// Domain patterns, in priority order: electrical, hydraulic, structural,
/// architectural. A line matching more than one is attributed to the
/// earliest.
static PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // elétrico
        r"(?i)(cabo|condutor)\s+([0-9]{1,2},?[0-9]?\s*mm²)\s*(pvc|pe|xlpe)?",
        r"(?i)(disjuntor|dj)\s*(\d{1,3})\s*a\b",
        r"(?i)(eletroduto|eletrocalha|perfil)\s*(pvc|metálico|metalico)?\s*(\d{1,3}mm)?",
        // hidráulico
        r"(?i)(tubo|tubulação)\s*(pvc|ppr|cpvc|pex)\s*(\d{1,3})\s*mm",
        r"(?i)(joelho|curva|luva|tê|valvula|registro)\s*(\d{1,3})\s*mm",
        // estrutura
        r"(?i)(aço|aco)\s*ca-?50|ca-?60|resina|chumbador",
        r"(?i)(concreto)\s*fck\s*(\d{2,3})\s*mpa",
        // arquitetura
        r"(?i)(revestimento|porcelanato|piso|pintura|massa corrida|argamassa)\b.*?(\d+[,.]?\d*)\s*m²",
        r"(?i)(porta|janela|esquadria)\s*(alumínio|aluminio|madeira|pvc)?\s*(\d+[x×]\d+)?",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("material pattern is valid"))
    .collect()
});

/// Extract material records from a transcript.
///
/// Lines are trimmed and empty lines skipped. The output is deduplicated by
/// lower-cased especificacao, keeping the first occurrence and preserving
/// line order otherwise.
pub fn extract_materials(transcript: &str) -> Vec<MaterialRecord> {
    let lines = transcript
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty());

    let mut records = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for line in lines {
        let Some(record) = match_line(line) else {
            continue;
        };
        let key = record.especificacao.to_lowercase();
        if seen.insert(key) {
            records.push(record);
        }
    }

    records
}

/// Test a single line against the pattern list, short-circuiting on the
/// first match.
fn match_line(line: &str) -> Option<MaterialRecord> {
    for pattern in PATTERNS.iter() {
        if let Some(caps) = pattern.captures(line) {
            // Some branches carry no capture group (e.g. "resina"); fall
            // back to the line's first token.
            let item = caps
                .get(1)
                .map(|m| m.as_str())
                .or_else(|| line.split_whitespace().next())
                .unwrap_or(line)
                .to_uppercase();

            return Some(MaterialRecord {
                item,
                especificacao: line.to_string(),
                unidade: String::new(),
                quantidade: String::new(),
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cabo_line_becomes_record() {
        let records = extract_materials("Cabo 2,5mm² PVC");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].item, "CABO");
        assert_eq!(records[0].especificacao, "Cabo 2,5mm² PVC");
        assert_eq!(records[0].unidade, "");
        assert_eq!(records[0].quantidade, "");
    }

    #[test]
    fn disjuntor_line_becomes_record() {
        let records = extract_materials("Disjuntor 32A");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].item, "DISJUNTOR");
        assert_eq!(records[0].especificacao, "Disjuntor 32A");
    }

    #[test]
    fn first_matching_pattern_wins() {
        // Matches both the cable pattern and the breaker pattern; the cable
        // pattern comes first in the list.
        let records = extract_materials("Cabo 2,5mm² pvc para disjuntor 32 a");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].item, "CABO");
    }

    #[test]
    fn groupless_branch_falls_back_to_first_token() {
        // "resina" is an alternation branch outside any capture group.
        let records = extract_materials("Resina epóxi para chumbador");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].item, "RESINA");
    }

    #[test]
    fn unmatched_lines_are_dropped() {
        let records = extract_materials("Reunião de obra dia 12\nAta aprovada");
        assert!(records.is_empty());
    }

    #[test]
    fn lines_are_trimmed_and_blanks_skipped() {
        let records = extract_materials("\n   Disjuntor 20A   \n\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].especificacao, "Disjuntor 20A");
    }

    #[test]
    fn dedup_is_case_insensitive_and_keeps_first() {
        let transcript = "Disjuntor 32A\nTubo PVC 25 mm\nDISJUNTOR 32a";
        let records = extract_materials(transcript);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].especificacao, "Disjuntor 32A");
        assert_eq!(records[1].item, "TUBO");

        let keys: HashSet<String> = records
            .iter()
            .map(|r| r.especificacao.to_lowercase())
            .collect();
        assert_eq!(keys.len(), records.len());
    }

    #[test]
    fn extraction_is_deterministic() {
        let transcript = "Cabo 4mm² XLPE\nConcreto fck 30 MPa\nJanela alumínio 120x100";
        let first = extract_materials(transcript);
        let second = extract_materials(transcript);
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn hydraulic_and_architectural_patterns_match() {
        let transcript = "Tubo PPR 32 mm água quente\n\
                          Registro 25 mm esfera\n\
                          Porcelanato acetinado 45,5 m²\n\
                          Porta madeira 80x210";
        let records = extract_materials(transcript);
        let items: Vec<&str> = records.iter().map(|r| r.item.as_str()).collect();
        assert_eq!(items, vec!["TUBO", "REGISTRO", "PORCELANATO", "PORTA"]);
    }

    #[test]
    fn empty_transcript_yields_no_records() {
        assert!(extract_materials("").is_empty());
    }
}
