//! Header parsing - context clauses and design unit headers

use vlark_lex::TokenKind;
use vlark_util::SourcePosition;

use crate::ast::{DesignUnit, DesignUnitKind};
use crate::{PResult, Parser, Reported};

impl<'a> Parser<'a> {
    /// Parse one statement
    ///
    /// Recognised headers yield a [`DesignUnit`]; any other statement is
    /// skipped up to and including its `;`.
    pub(crate) fn parse_statement(&mut self) -> PResult<Option<DesignUnit>> {
        let position = self.current_position();

        let unit = match self.current_kind() {
            TokenKind::Library => self.parse_library(position)?,
            TokenKind::Use => self.parse_use(position)?,
            TokenKind::Context => self.parse_context(position)?,
            TokenKind::Entity => self.parse_entity(position)?,
            TokenKind::Architecture => {
                self.parse_secondary(DesignUnitKind::Architecture, position)?
            },
            TokenKind::Configuration => {
                self.parse_secondary(DesignUnitKind::Configuration, position)?
            },
            TokenKind::Package => self.parse_package(position)?,
            TokenKind::RightParen | TokenKind::RightBracket | TokenKind::BlockCommentEnd => {
                self.error_unexpected();
                return Err(Reported);
            },
            _ => {
                self.skip_statement();
                return Ok(None);
            },
        };
        Ok(Some(unit))
    }

    /// Skip past the next `;`
    fn skip_statement(&mut self) {
        while !self.is_at_end() {
            let kind = self.current_kind();
            self.advance();
            if kind == TokenKind::Semicolon {
                break;
            }
        }
    }

    /// Parse `library name {, name};`
    fn parse_library(&mut self, position: SourcePosition) -> PResult<DesignUnit> {
        self.advance();
        let mut unit = DesignUnit::new(DesignUnitKind::Library, position);
        loop {
            unit.names.push(self.parse_ident()?);
            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::Semicolon)?;
        Ok(unit)
    }

    /// Parse `use selected_name {, selected_name};`
    fn parse_use(&mut self, position: SourcePosition) -> PResult<DesignUnit> {
        self.advance();
        let mut unit = DesignUnit::new(DesignUnitKind::Use, position);
        unit.names = self.parse_selected_names()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(unit)
    }

    /// Parse a context declaration header or a context reference
    ///
    /// `context name is` declares a context; `context lib.name;` refers to
    /// one.
    fn parse_context(&mut self, position: SourcePosition) -> PResult<DesignUnit> {
        self.advance();
        if self.current_kind() == TokenKind::Identifier && self.peek_kind() == TokenKind::Is {
            let name = self.parse_ident()?;
            self.advance();
            return Ok(DesignUnit::new(DesignUnitKind::Context, position).with_name(name));
        }

        let mut unit = DesignUnit::new(DesignUnitKind::ContextReference, position);
        unit.names = self.parse_selected_names()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(unit)
    }

    /// Parse `entity name is`
    fn parse_entity(&mut self, position: SourcePosition) -> PResult<DesignUnit> {
        self.advance();
        let name = self.parse_ident()?;
        self.expect(TokenKind::Is)?;
        Ok(DesignUnit::new(DesignUnitKind::Entity, position).with_name(name))
    }

    /// Parse `architecture name of entity is` or
    /// `configuration name of entity is`
    fn parse_secondary(
        &mut self,
        kind: DesignUnitKind,
        position: SourcePosition,
    ) -> PResult<DesignUnit> {
        self.advance();
        let name = self.parse_ident()?;
        self.expect(TokenKind::Of)?;
        let of = self.parse_ident()?;
        self.expect(TokenKind::Is)?;
        Ok(DesignUnit::new(kind, position).with_name(name).with_of(of))
    }

    /// Parse `package name is` or `package body name is`
    fn parse_package(&mut self, position: SourcePosition) -> PResult<DesignUnit> {
        self.advance();
        let kind = if self.match_token(TokenKind::Body) {
            DesignUnitKind::PackageBody
        } else {
            DesignUnitKind::Package
        };
        let name = self.parse_ident()?;
        self.expect(TokenKind::Is)?;
        Ok(DesignUnit::new(kind, position).with_name(name))
    }

    /// Parse a comma-separated list of selected names
    fn parse_selected_names(&mut self) -> PResult<Vec<String>> {
        let mut names = vec![self.parse_selected_name()?];
        while self.match_token(TokenKind::Comma) {
            names.push(self.parse_selected_name()?);
        }
        Ok(names)
    }

    /// Parse `prefix.suffix{.suffix}`
    ///
    /// A suffix may be an identifier, `all`, a character literal or an
    /// operator symbol such as `"+"`.
    fn parse_selected_name(&mut self) -> PResult<String> {
        let mut name = self.parse_ident()?;
        while self.match_token(TokenKind::Dot) {
            match self.current_kind() {
                TokenKind::Identifier
                | TokenKind::All
                | TokenKind::Character
                | TokenKind::String => {
                    name.push('.');
                    name.push_str(self.current_text());
                    self.advance();
                },
                _ => {
                    self.error_expected("a suffix after `.`");
                    return Err(Reported);
                },
            }
        }
        Ok(name)
    }
}
