//! Static catalog of checklist/prompt templates, organized by phase of the
//! construction project. Pure data plus a substring filter; nothing here
//! touches the extraction pipeline.

use clap::ValueEnum;

/// The six fixed phases of the panel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lower")]
pub enum Phase {
    Planejamento,
    Projeto,
    Suprimentos,
    Execucao,
    PosObra,
    Automacoes,
}

impl Phase {
    pub const ALL: [Phase; 6] = [
        Phase::Planejamento,
        Phase::Projeto,
        Phase::Suprimentos,
        Phase::Execucao,
        Phase::PosObra,
        Phase::Automacoes,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Phase::Planejamento => "planejamento",
            Phase::Projeto => "projeto",
            Phase::Suprimentos => "suprimentos",
            Phase::Execucao => "execucao",
            Phase::PosObra => "posobra",
            Phase::Automacoes => "automacoes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Planejamento => "1. Planejamento / Pré-Obra",
            Phase::Projeto => "2. Projeto",
            Phase::Suprimentos => "3. Suprimentos",
            Phase::Execucao => "4. Execução",
            Phase::PosObra => "5. Pós-Obra",
            Phase::Automacoes => "6. Automações",
        }
    }
}

/// A predefined prompt entry surfaced by the catalog.
pub struct ActionTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub metric: Option<&'static str>,
    pub tags: &'static [&'static str],
    pub prompt: &'static str,
}

/// All actions for a phase, in catalog order.
pub fn actions_for(phase: Phase) -> &'static [ActionTemplate] {
    match phase {
        Phase::Planejamento => &PLANEJAMENTO,
        Phase::Projeto => &PROJETO,
        Phase::Suprimentos => &SUPRIMENTOS,
        Phase::Execucao => &EXECUCAO,
        Phase::PosObra => &POSOBRA,
        Phase::Automacoes => &AUTOMACOES,
    }
}

/// Filter a phase's actions by case-insensitive substring match on the
/// concatenated title, summary and tags. An empty query keeps everything;
/// no match is an empty (not-found) result, never an error.
pub fn filter_actions(phase: Phase, query: &str) -> Vec<&'static ActionTemplate> {
    let query = query.to_lowercase();
    actions_for(phase)
        .iter()
        .filter(|a| {
            let haystack =
                format!("{}{}{}", a.title, a.summary, a.tags.join(" ")).to_lowercase();
            haystack.contains(&query)
        })
        .collect()
}

/// Look up an action by id across all phases.
pub fn find_action(id: &str) -> Option<(Phase, &'static ActionTemplate)> {
    Phase::ALL.iter().find_map(|&phase| {
        actions_for(phase)
            .iter()
            .find(|a| a.id == id)
            .map(|a| (phase, a))
    })
}

static PLANEJAMENTO: [ActionTemplate; 4] = [
    ActionTemplate {
        id: "viabilidade",
        title: "Estudo de Viabilidade (TE + ECO)",
        summary: "Quadro-resumo: potencial, restrições, CAPEX/OPEX, VGV e sensibilidade.",
        metric: Some("PDF/planilha"),
        tags: &["potencial", "leis", "custos"],
        prompt: "Crie um estudo de viabilidade para um edifício residencial em Belo Horizonte: 1) parâmetros urbanísticos (zoneamento, CA, TO, gabarito, recuos, vagas) com base na legislação municipal; 2) estimativa de VGV e tipologias (mix por m²); 3) CAPEX por macroetapas (terraplanagem, estrutura, alvenaria, instalações, acabamentos, fachada, elevadores, indiretos); 4) curva de caixa mensal; 5) análise de sensibilidade (±10% em custos e VGV); 6) riscos e medidas mitigatórias; 7) checklist de licenças. Estruture como sumário executivo + tabelas. Assuma dados onde faltarem e explicite premissas.",
    },
    ActionTemplate {
        id: "licenciamento",
        title: "Checklist de Licenciamento",
        summary: "Documentos por órgão, taxas e prazos médios.",
        metric: Some("Checklist + cronograma"),
        tags: &["documentos", "prazos"],
        prompt: "Monte um checklist de licenciamento para obra predial em BH: 1) Prefeitura (etapas, taxas, prazos médios, documentos); 2) CBMMG (PPCI, ARTs, memoriais); 3) Concessionárias (água, esgoto, energia, telecom); 4) Ambientais (se aplicável). Gere também um cronograma com dependências e caminho crítico. Saída em tabela Markdown.",
    },
    ActionTemplate {
        id: "contratos",
        title: "Minutas e Cláusulas Críticas",
        summary: "Empreitada, subempreita e fornecimento com SLAs, medições e reajuste.",
        metric: Some("Minutas editáveis"),
        tags: &["jurídico", "SLA"],
        prompt: "Crie minutas contratuais (empreitada global, subempreita e fornecimento) com: escopo, medições, reajuste por índice, retenções, garantias, cronograma físico-financeiro, multas, confidencialidade e resolução de conflitos. Inclua checklists de documentos e matriz RACI.",
    },
    ActionTemplate {
        id: "planejamento-exec",
        title: "Cronograma Executivo + Curva S",
        summary: "EAP por macro/microetapas com marcos e caixa.",
        metric: Some("CSV/Excel"),
        tags: &["prazo", "custos"],
        prompt: "Elabore uma EAP (WBS) detalhada para obra predial de 18-24 meses, com durações, predecessoras, marcos, recursos críticos e curva S físico-financeira. Saída em CSV para importação no MS Project/Primavera.",
    },
];

static PROJETO: [ActionTemplate; 3] = [
    ActionTemplate {
        id: "compatibilizacao",
        title: "Compatibilização de Projetos",
        summary: "Clash list (ARQ x STR x MEP) + RFIs.",
        metric: None,
        tags: &["clash", "RFI"],
        prompt: "Gere checklist de compatibilização entre arquitetura, estrutural, elétrico, hidráulico e HVAC. Identifique conflitos típicos e redija 10 RFIs padrão com campos preenchíveis. Saída em tabela.",
    },
    ActionTemplate {
        id: "memorial",
        title: "Memorial Descritivo Padronizado",
        summary: "Especificações por ambiente + NBR 15575.",
        metric: None,
        tags: &["NBR", "desempenho"],
        prompt: "Produza um memorial descritivo conforme NBR 15575: requisitos de desempenho por sistema, especificações por ambiente, marcas de referência, equivalência técnica e plano de ensaios. Inclua tabela de rastreabilidade de versões.",
    },
    ActionTemplate {
        id: "encargos",
        title: "Caderno de Encargos",
        summary: "Diretrizes técnicas e entregáveis padrão.",
        metric: None,
        tags: &[],
        prompt: "Elabore um caderno de encargos para projetistas (ARQ, STR, ELÉ, HID, GÁS, SPDA, INCÊNDIO): escopo mínimo, nível de detalhamento por pranchas, convenções gráficas, formatos de entrega (DWG/IFC/PDF), e prazos de revisão.",
    },
];

static SUPRIMENTOS: [ActionTemplate; 3] = [
    ActionTemplate {
        id: "cotacao",
        title: "Pacote de Cotação Comparativa",
        summary: "Termo de referência + planilha comparativa.",
        metric: None,
        tags: &[],
        prompt: "Crie termo de referência e modelo de planilha comparativa para 3-5 fornecedores: campos de preço unitário, prazo, garantia, frete, impostos, condições de pagamento e compliance. Incluir critérios de desempate.",
    },
    ActionTemplate {
        id: "negociacao",
        title: "Script de Negociação Técnica",
        summary: "Argumentos por categoria.",
        metric: None,
        tags: &[],
        prompt: "Liste argumentos técnicos e comerciais para negociação de cimento, aço CA-50, esquadrias de alumínio, elevadores e louças/metais, com faixas de preço de mercado (coloque como variável) e concessões escalonadas.",
    },
    ActionTemplate {
        id: "estoque",
        title: "Controle de Estoque (Kanban)",
        summary: "Mínimos/máximos e alertas.",
        metric: None,
        tags: &[],
        prompt: "Monte um quadro Kanban de estoque por família de itens com níveis mínimo/máximo, lead time e gatilhos de reposição. Gere também um CSV de exemplo.",
    },
];

static EXECUCAO: [ActionTemplate; 3] = [
    ActionTemplate {
        id: "seguranca",
        title: "Plano de Segurança (SST)",
        summary: "APRs por serviço, checklists e DDS.",
        metric: None,
        tags: &["NRs", "APR", "DDS"],
        prompt: "Crie um plano de segurança com APRs por serviço (escavação, fôrma, armação, concretagem, alvenaria, cobertura, fachada), checklists diários e 12 roteiros de DDS.",
    },
    ActionTemplate {
        id: "check-inspecao",
        title: "Checklists de Inspeção por Serviço",
        summary: "Fundação, estrutura, alvenaria, instalações, acabamento e fachada.",
        metric: None,
        tags: &[],
        prompt: "Gere checklists de inspeção por etapa (fundação, estrutura, alvenaria, elétrico, hidráulico, impermeabilização, revestimentos, esquadrias, fachada) com critérios de aceitação e evidências fotográficas.",
    },
    ActionTemplate {
        id: "financeiro",
        title: "Orçado x Real",
        summary: "% físico/financeiro, desvios e plano de ação.",
        metric: None,
        tags: &[],
        prompt: "Monte uma planilha de controle orçado vs. realizado com % físico, % financeiro, desvios absolutos e relativos, causas-raiz e plano de ação. Saída em CSV.",
    },
];

static POSOBRA: [ActionTemplate; 2] = [
    ActionTemplate {
        id: "entrega",
        title: "Plano de Entrega ao Condomínio",
        summary: "Dossiê técnico, manuais e vistorias.",
        metric: None,
        tags: &[],
        prompt: "Crie um plano de entrega: dossiê técnico (as built, ARTs, manuais), cronograma de vistorias, termos de recebimento e plano de manutenção por sistema.",
    },
    ActionTemplate {
        id: "assistencia",
        title: "Assistência Técnica e SLA",
        summary: "Fluxo de chamados e KPIs.",
        metric: None,
        tags: &[],
        prompt: "Desenhe um processo de assistência: canais, triagem, criticidade, prazos de atendimento/solução, registros e relatórios mensais com KPIs.",
    },
];

static AUTOMACOES: [ActionTemplate; 3] = [
    ActionTemplate {
        id: "comunicados",
        title: "Comunicados e A Pagar (padrões)",
        summary: "Textos no padrão definido, incluindo múltiplos docs.",
        metric: None,
        tags: &[],
        prompt: "Use o padrão registrado para comunicados e solicitações: (1) A Pagar com lista numerada dos documentos (Fornecedor, Mês, Vencimento, Valor); (2) Reembolsos com descrição, valor, total e dados bancários fixos. Produza o texto pronto para envio.",
    },
    ActionTemplate {
        id: "comparativos",
        title: "Planilhas Comparativas Automáticas",
        summary: "De NF/propostas para quadro comparativo.",
        metric: None,
        tags: &[],
        prompt: "Converta PDFs de propostas/Notas Fiscais em tabela e gere quadro comparativo com recomendação técnica e comercial.",
    },
    ActionTemplate {
        id: "checkflows",
        title: "Checklists e Fluxos Padrão",
        summary: "Modelos reutilizáveis por etapa.",
        metric: None,
        tags: &[],
        prompt: "Crie checklists e fluxos operacionais por etapa da obra com campos de responsável, data, evidência e observações.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_phase_has_actions() {
        for phase in Phase::ALL {
            assert!(!actions_for(phase).is_empty(), "{}", phase.id());
        }
    }

    #[test]
    fn catalog_totals_eighteen_actions() {
        let total: usize = Phase::ALL.iter().map(|&p| actions_for(p).len()).sum();
        assert_eq!(total, 18);
    }

    #[test]
    fn empty_query_returns_all_in_order() {
        let all = filter_actions(Phase::Planejamento, "");
        let ids: Vec<&str> = all.iter().map(|a| a.id).collect();
        assert_eq!(
            ids,
            vec!["viabilidade", "licenciamento", "contratos", "planejamento-exec"]
        );
    }

    #[test]
    fn filter_is_case_insensitive() {
        let hits = filter_actions(Phase::Planejamento, "LICENCIAMENTO");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "licenciamento");
    }

    #[test]
    fn filter_matches_tags_too() {
        let hits = filter_actions(Phase::Projeto, "rfi");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "compatibilizacao");
    }

    #[test]
    fn no_match_is_an_empty_result() {
        let hits = filter_actions(Phase::PosObra, "terraplanagem");
        assert!(hits.is_empty());
    }

    #[test]
    fn action_ids_are_unique_across_phases() {
        let mut seen = std::collections::HashSet::new();
        for phase in Phase::ALL {
            for action in actions_for(phase) {
                assert!(seen.insert(action.id), "duplicate id {}", action.id);
            }
        }
    }

    #[test]
    fn find_action_locates_phase() {
        let (phase, action) = find_action("seguranca").unwrap();
        assert_eq!(phase, Phase::Execucao);
        assert!(action.prompt.contains("APRs"));
        assert!(find_action("inexistente").is_none());
    }
}
