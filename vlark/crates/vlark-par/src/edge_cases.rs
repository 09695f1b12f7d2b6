//! Edge case tests for vlark-par

#[cfg(test)]
mod tests {
    use crate::{Ast, DesignUnitKind, Parser};
    use vlark_lex::{tokenize, LexerConfig, SourceBuffer};
    use vlark_util::{DiagnosticCode, Handler};

    fn parse_source(source: &str) -> (Ast, Handler) {
        let handler = Handler::new();
        let buffer =
            SourceBuffer::from_source(source, &LexerConfig::default(), &handler).unwrap();
        let tokens = tokenize(&buffer, &handler).unwrap();
        let ast = Parser::new(&tokens, &buffer, &handler).parse();
        (ast, handler)
    }

    fn kinds(ast: &Ast) -> Vec<DesignUnitKind> {
        ast.design_units.iter().map(|u| u.kind).collect()
    }

    // ==================== EDGE CASES ====================

    /// EDGE CASE: Whitespace only
    #[test]
    fn test_edge_whitespace_only() {
        let (ast, handler) = parse_source("   \n\t  \n  ");
        assert!(ast.is_empty());
        assert!(!handler.has_errors());
    }

    /// EDGE CASE: Empty token slice
    #[test]
    fn test_edge_no_tokens() {
        let handler = Handler::new();
        let buffer = SourceBuffer::default();
        let ast = Parser::new(&[], &buffer, &handler).parse();
        assert!(ast.is_empty());
        assert_eq!(ast.token_count, 0);
    }

    /// EDGE CASE: Keywords in any case
    #[test]
    fn test_edge_upper_case_headers() {
        let (ast, _) = parse_source("ENTITY Top IS END;\nARCHITECTURE Rtl OF Top IS BEGIN END;");
        assert_eq!(kinds(&ast), [DesignUnitKind::Entity, DesignUnitKind::Architecture]);
        assert_eq!(ast.design_units[1].name.as_deref(), Some("Rtl"));
    }

    /// EDGE CASE: Header split over lines and comments
    #[test]
    fn test_edge_header_across_lines() {
        let (ast, handler) = parse_source("architecture -- the body\n  rtl\n/* of what */\n  of e is begin end;");
        assert!(handler.is_empty());
        assert_eq!(ast.design_units[0].of.as_deref(), Some("e"));
        assert_eq!(ast.design_units[0].position.line, 1);
    }

    /// EDGE CASE: Headers after `end` are not new units
    #[test]
    fn test_edge_end_clauses_are_skipped() {
        let (ast, _) = parse_source("entity e is\nend entity e;\npackage p is\nend package p;");
        assert_eq!(kinds(&ast), [DesignUnitKind::Entity, DesignUnitKind::Package]);
    }

    /// EDGE CASE: Direct entity instantiation inside an architecture
    #[test]
    fn test_edge_entity_instantiation() {
        let (ast, handler) = parse_source(
            "architecture a of e is\nbegin\n  u1 : entity work.leaf port map (x => y);\nend;",
        );
        assert!(handler.is_empty());
        assert_eq!(kinds(&ast), [DesignUnitKind::Architecture]);
    }

    /// EDGE CASE: Lexical errors do not stop the outline
    #[test]
    fn test_edge_lexical_errors_pass_through() {
        let (ast, handler) = parse_source("entity e is\n  x $ y;\nend;\npackage p is end;");
        assert_eq!(kinds(&ast), [DesignUnitKind::Entity, DesignUnitKind::Package]);
        assert_eq!(handler.error_count(), 1);
        assert_eq!(
            handler.diagnostics()[0].code,
            Some(DiagnosticCode::E_LEX_UNKNOWN_CHAR)
        );
    }

    /// EDGE CASE: Missing `is` stops the header only
    #[test]
    fn test_edge_missing_is() {
        let (ast, handler) = parse_source("entity e port (a : bit);\nend;\nentity f is end;");
        assert_eq!(kinds(&ast), [DesignUnitKind::Entity]);
        assert_eq!(ast.design_units[0].name.as_deref(), Some("f"));
        assert_eq!(handler.error_count(), 1);
    }

    /// EDGE CASE: Several errors reported in one pass
    #[test]
    fn test_edge_many_errors() {
        let (ast, handler) = parse_source("entity;\narchitecture a of;\npackage body;\nlibrary;");
        assert!(ast.is_empty());
        assert_eq!(handler.error_count(), 4);
        assert!(handler
            .diagnostics()
            .iter()
            .all(|d| d.code == Some(DiagnosticCode::E_PARSE_EXPECTED_TOKEN)));
    }

    /// EDGE CASE: Truncated header at end of file is a fallback report
    #[test]
    fn test_edge_truncated_header() {
        let (_, handler) = parse_source("architecture rtl of");
        let reportable = handler.reportable();
        assert_eq!(reportable.len(), 1);
        assert!(reportable[0].fallback);
        assert_eq!(reportable[0].position().column, 20);
    }
}
