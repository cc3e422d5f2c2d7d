//! Lexical analysis and typed access for surface definitions of the form
//! `name key=value key=value ...`, e.g. `gamma_t p=3 t=0.5`.
use super::Order;
use crate::coordinate::Coor2D;
use crate::Error;
use std::collections::BTreeMap;

/// Remove non-significant whitespace: glue key-value pairs together by
/// omitting whitespace around '=', and complex components by omitting
/// whitespace around ','.
/// ```txt
/// gamma_s  p = 3   c= 0.6 , 0.8  ->  gamma_s p=3 c=0.6,0.8
/// ```
pub fn normalize(definition: &str) -> String {
    let elements: Vec<_> = definition.split_whitespace().collect();
    elements
        .join(" ")
        .replace("= ", "=")
        .replace(", ", ",")
        .replace(" =", "=")
        .replace(" ,", ",")
}

/// The parameters of a surface definition, split into its name and its
/// `key=value` pairs
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Parameters {
    pub name: String,
    pub given: BTreeMap<String, String>,
}

impl Parameters {
    /// Split a definition into parameters. The first element is the name.
    /// ```txt
    /// 'kusner p=3' -> (name='kusner', given={'p': '3'})
    /// ```
    pub fn new(definition: &str) -> Result<Parameters, Error> {
        let normalized = normalize(definition);
        let mut elements = normalized.split_whitespace();

        let Some(name) = elements.next() else {
            return Err(Error::Syntax("empty surface definition".to_string()));
        };
        if name.contains('=') {
            return Err(Error::Syntax(format!(
                "expected a surface name, found '{name}'"
            )));
        }

        let mut given = BTreeMap::new();
        for element in elements {
            let Some((key, value)) = element.split_once('=') else {
                return Err(Error::Syntax(format!("expected key=value, found '{element}'")));
            };
            if key.is_empty() || value.is_empty() {
                return Err(Error::Syntax(format!("expected key=value, found '{element}'")));
            }
            if given.insert(key.to_string(), value.to_string()).is_some() {
                return Err(Error::Syntax(format!("parameter '{key}' given twice")));
            }
        }

        Ok(Parameters {
            name: name.to_string(),
            given,
        })
    }

    /// The natural parameter `p`, validated as an [`Order`]
    pub fn order(&self, key: &str) -> Result<Order, Error> {
        let Some(value) = self.given.get(key) else {
            return Err(Error::MissingParam(key.to_string()));
        };
        let p = value
            .parse::<i64>()
            .map_err(|_| Error::BadParam(key.to_string(), value.to_string()))?;
        Order::try_from(p)
    }

    /// A real valued parameter, or `default` if not given
    pub fn real(&self, key: &str, default: f64) -> Result<f64, Error> {
        let Some(value) = self.given.get(key) else {
            return Ok(default);
        };
        value
            .parse::<f64>()
            .map_err(|_| Error::BadParam(key.to_string(), value.to_string()))
    }

    /// A complex valued parameter given as `re,im`, or `default` if not given
    pub fn complex(&self, key: &str, default: Coor2D) -> Result<Coor2D, Error> {
        let Some(value) = self.given.get(key) else {
            return Ok(default);
        };
        let bad = || Error::BadParam(key.to_string(), value.to_string());
        let Some((re, im)) = value.split_once(',') else {
            return Err(bad());
        };
        let re = re.parse::<f64>().map_err(|_| bad())?;
        let im = im.parse::<f64>().map_err(|_| bad())?;
        Ok(Coor2D([re, im]))
    }

    /// Keys given, but not in `known`
    pub fn ignored(&self, known: &[&str]) -> Vec<String> {
        self.given
            .keys()
            .filter(|k| !known.contains(&k.as_str()))
            .cloned()
            .collect()
    }
}

// ----- T E S T S ---------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::complex::ONE;

    #[test]
    fn normalization() {
        assert_eq!(
            normalize("  gamma_s  p = 3   c= 0.6 , 0.8 "),
            "gamma_s p=3 c=0.6,0.8"
        );
    }

    #[test]
    fn split() -> Result<(), Error> {
        let params = Parameters::new("gamma_t p = 3 t=0.5")?;
        assert_eq!(params.name, "gamma_t");
        assert_eq!(params.given.len(), 2);
        assert_eq!(params.order("p")?.get(), 3);
        assert_eq!(params.real("t", 0.)?, 0.5);
        assert_eq!(params.real("s", 0.25)?, 0.25);
        assert_eq!(params.complex("c", ONE)?, ONE);
        assert_eq!(params.ignored(&["p"]), vec!["t".to_string()]);

        let params = Parameters::new("phitilde_family p=4 c=0.6,-0.8")?;
        assert_eq!(params.complex("c", ONE)?, Coor2D::raw(0.6, -0.8));
        Ok(())
    }

    #[test]
    fn errors() {
        assert!(matches!(Parameters::new("   "), Err(Error::Syntax(_))));
        assert!(matches!(Parameters::new("p=3"), Err(Error::Syntax(_))));
        assert!(matches!(Parameters::new("kusner p"), Err(Error::Syntax(_))));
        assert!(matches!(Parameters::new("kusner p=3 p=4"), Err(Error::Syntax(_))));

        let params = Parameters::new("kusner p=three s=x c=1").unwrap();
        assert!(matches!(params.order("p"), Err(Error::BadParam(..))));
        assert!(matches!(params.order("q"), Err(Error::MissingParam(_))));
        assert!(matches!(params.real("s", 0.), Err(Error::BadParam(..))));
        assert!(matches!(params.complex("c", ONE), Err(Error::BadParam(..))));

        let params = Parameters::new("kusner p=1").unwrap();
        assert!(matches!(params.order("p"), Err(Error::InvalidOrder(1))));
    }
}
