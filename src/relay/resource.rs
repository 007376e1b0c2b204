//! The resources exposed by the relay and how each maps upstream.

use serde_json::Value;

use crate::relay::validate::{self, ValidationError};

/// Maximum number of entries returned for catalog resources.
pub const CATALOG_LIMIT: usize = 5;

/// One category of upstream data, exposed as one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Banks,
    Cambio,
    Cep,
    Cnpj,
    Corretoras,
    Cptec,
    Ddd,
    Feriados,
    Fipe,
    IbgeNomes,
    Isbn,
    Ncm,
    Pix,
    RegistroBr,
    Taxas,
}

impl Resource {
    pub const ALL: [Resource; 15] = [
        Resource::Banks,
        Resource::Cambio,
        Resource::Cep,
        Resource::Cnpj,
        Resource::Corretoras,
        Resource::Cptec,
        Resource::Ddd,
        Resource::Feriados,
        Resource::Fipe,
        Resource::IbgeNomes,
        Resource::Isbn,
        Resource::Ncm,
        Resource::Pix,
        Resource::RegistroBr,
        Resource::Taxas,
    ];

    /// Short label used in logs and metrics.
    pub fn name(self) -> &'static str {
        match self {
            Resource::Banks => "banks",
            Resource::Cambio => "cambio",
            Resource::Cep => "cep",
            Resource::Cnpj => "cnpj",
            Resource::Corretoras => "corretoras",
            Resource::Cptec => "cptec",
            Resource::Ddd => "ddd",
            Resource::Feriados => "feriados",
            Resource::Fipe => "fipe",
            Resource::IbgeNomes => "ibge_nomes",
            Resource::Isbn => "isbn",
            Resource::Ncm => "ncm",
            Resource::Pix => "pix",
            Resource::RegistroBr => "registrobr",
            Resource::Taxas => "taxas",
        }
    }

    /// Inbound axum route pattern.
    pub fn route(self) -> &'static str {
        match self {
            Resource::Banks => "/api/banks",
            Resource::Cambio => "/api/cambio",
            Resource::Cep => "/api/cep/{cep}",
            Resource::Cnpj => "/api/cnpj/{cnpj}",
            Resource::Corretoras => "/api/corretoras",
            Resource::Cptec => "/api/cptec/{city_code}",
            Resource::Ddd => "/api/ddd/{ddd}",
            Resource::Feriados => "/api/feriados/{ano}",
            Resource::Fipe => "/api/fipe/{codigo_fipe}",
            Resource::IbgeNomes => "/api/ibge/nomes/{nome}",
            Resource::Isbn => "/api/isbn/{isbn}",
            Resource::Ncm => "/api/ncm/{code}",
            Resource::Pix => "/api/pix",
            Resource::RegistroBr => "/api/registrobr/{domain}",
            Resource::Taxas => "/api/taxas",
        }
    }

    /// Upstream path segments, relative to the configured base URL.
    /// The request key, when present, is appended as a final segment.
    pub fn upstream_path(self) -> &'static [&'static str] {
        match self {
            Resource::Banks => &["banks", "v1"],
            Resource::Cambio => &["cambio"],
            Resource::Cep => &["cep", "v2"],
            Resource::Cnpj => &["cnpj", "v1"],
            Resource::Corretoras => &["corretoras", "v1"],
            Resource::Cptec => &["cptec", "v1", "clima", "previsao"],
            Resource::Ddd => &["ddd", "v1"],
            Resource::Feriados => &["feriados", "v1"],
            Resource::Fipe => &["fipe", "preco", "v1"],
            Resource::IbgeNomes => &["ibge", "nomes", "v2"],
            Resource::Isbn => &["isbn", "v1"],
            Resource::Ncm => &["ncm", "v1"],
            Resource::Pix => &["pix", "v1", "participants"],
            Resource::RegistroBr => &["registrobr", "v1"],
            Resource::Taxas => &["taxas", "v1"],
        }
    }

    /// Fixed query parameters sent upstream.
    pub fn upstream_query(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Resource::Cambio => &[("currency", "USD")],
            _ => &[],
        }
    }

    /// Catalog resources return long lists that are cut to `CATALOG_LIMIT`.
    pub fn is_catalog(self) -> bool {
        matches!(self, Resource::Banks | Resource::Corretoras | Resource::Pix)
    }

    /// Check `key` against this resource's format rule.
    ///
    /// Resources without a rule accept any key.
    pub fn validate(self, key: &str) -> Result<(), ValidationError> {
        match self {
            Resource::Cep => validate::postal_code(key),
            Resource::Cnpj => validate::company_tax_id(key),
            Resource::Ddd => validate::area_code(key),
            Resource::Feriados => validate::holiday_year(key),
            Resource::Fipe => validate::vehicle_price_code(key),
            Resource::Isbn => validate::book_number(key),
            Resource::Ncm => validate::tariff_code(key),
            Resource::RegistroBr => validate::domain(key),
            _ => Ok(()),
        }
    }

    /// Apply response shaping to an upstream payload.
    ///
    /// Only catalog lists are touched; objects and non-catalog payloads pass
    /// through unchanged.
    pub fn shape(self, data: Value) -> Value {
        match data {
            Value::Array(mut items) if self.is_catalog() => {
                items.truncate(CATALOG_LIMIT);
                Value::Array(items)
            }
            other => other,
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
