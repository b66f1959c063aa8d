use crate::catalog::Catalog;
use crate::engine::{PredictionResult, PredictiveEngine};
use crate::matcher::{IntentMatcher, VoiceIntent};
use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::sync::Arc;

impl<'py> IntoPyObject<'py> for PredictionResult {
    type Target = PyDict;
    type Output = Bound<'py, Self::Target>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);
        dict.set_item("flow_id", self.flow_id.as_str())?;
        dict.set_item("follow_up_question", &self.follow_up_question)?;
        dict.set_item("predictive_text", &self.predictive_text)?;

        // Components keep their JSON shape; callers decode them with `json.loads`.
        let components = serde_json::to_string(&self.ui_components)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))?;
        dict.set_item("ui_components", components)?;
        Ok(dict)
    }
}

impl<'py> IntoPyObject<'py> for VoiceIntent {
    type Target = PyDict;
    type Output = Bound<'py, Self::Target>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);
        dict.set_item("service", self.service.as_str())?;
        dict.set_item("confidence", self.confidence)?;
        dict.set_item("preferences", self.preferences())?;
        dict.set_item("items", self.items)?;
        dict.set_item("quantity", self.quantity)?;
        dict.set_item("timing", self.timing.map(|t| t.as_str()))?;
        Ok(dict)
    }
}

/// The concierge flow engine.
///
/// Wraps a flow catalog and answers prediction, intent and menu queries
/// against it. Without arguments the built-in catalog is used.
#[pyclass(name = "Concierge")]
struct ConciergePy {
    engine: PredictiveEngine,
    matcher: IntentMatcher,
}

#[pymethods]
impl ConciergePy {
    /// Creates an engine.
    ///
    /// Args:
    ///     catalog_json (str | None): A catalog document. Defaults to the
    ///         built-in catalog.
    ///
    /// Raises:
    ///     ValueError: If the catalog cannot be parsed or fails validation.
    #[new]
    #[pyo3(signature = (catalog_json=None))]
    fn new(catalog_json: Option<&str>) -> PyResult<Self> {
        let catalog = match catalog_json {
            Some(json) => Catalog::from_json(json)
                .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?,
            None => Catalog::builtin(),
        };
        let catalog = Arc::new(catalog);
        Ok(ConciergePy {
            engine: PredictiveEngine::new(catalog.clone()),
            matcher: IntentMatcher::new(catalog),
        })
    }

    /// Predicts the flow step for a line of text.
    ///
    /// Returns:
    ///     dict | None: `flow_id`, `follow_up_question`, `predictive_text`
    ///         and `ui_components` (a JSON string), or None when nothing matches.
    fn predict(&self, text: &str) -> Option<PredictionResult> {
        self.engine.predict(text)
    }

    /// Extracts a service intent from free text.
    ///
    /// Returns:
    ///     dict | None: `service`, `confidence`, `preferences`, `items`,
    ///         `quantity` and `timing`, or None when no service matches.
    fn match_intent(&self, text: &str) -> Option<VoiceIntent> {
        self.matcher.match_intent(text)
    }

    /// The dishes for a food type (`veg`, `non-veg`) and meal, as a JSON string.
    fn menu(&self, food_type: &str, meal_type: &str) -> PyResult<String> {
        let cards = self.engine.food_menu_items_by_name(food_type, meal_type);
        serde_json::to_string(&cards)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
    }
}

/// Python bindings for the concierge flow engine.
#[pymodule]
fn concierge(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ConciergePy>()?;
    Ok(())
}
