//! Template authoring: a checklist of boolean attributes seeded from the
//! server's defaults for a genre.

use gamesmith_domain::{AttributeMap, AttributeMapBody, MULTIPLE_CHOICE_KEY};
use tracing::{debug, info, warn};
use url::form_urlencoded;

use crate::error::{ApiError, EditorError};
use crate::transport::{endpoints, ApiRequest, Transport};

pub const EMPTY_TITLE_MESSAGE: &str = "Template title cannot be empty";

/// One checkbox of the editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeOption {
    pub name: String,
    pub checked: bool,
    pub enabled: bool,
}

/// Successful `POST /template/create`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateCreated {
    pub title: String,
}

/// Editable attribute checklist for a new template.
///
/// When the defaults carry a `multipleChoice` attribute it acts as the
/// "allow multiple choice" flag: while it is unchecked every other option is
/// unchecked and disabled.
#[derive(Clone, Debug)]
pub struct AttributeEditor {
    genre: String,
    title: String,
    multiple_choice: Option<bool>,
    options: Vec<AttributeOption>,
    /// Position of the flag among the fetched keys, kept for serialization.
    flag_position: usize,
}

impl AttributeEditor {
    /// Requests the default attribute map for `genre`.
    pub fn fetch<T>(transport: &mut T, genre: &str) -> Result<Self, EditorError>
    where
        T: Transport + ?Sized,
    {
        let query: String = form_urlencoded::byte_serialize(genre.as_bytes()).collect();
        let path = format!("{}?genre={}", endpoints::DEFAULT_ATTR_MAP, query);
        debug!(%path, "fetching default attributes");

        let response = transport.send(ApiRequest::get(path)).map_err(ApiError::from)?;
        match response.status {
            200 => {
                let body: AttributeMapBody = response.decode()?;
                info!(
                    genre,
                    attributes = body.attr_map.len(),
                    "default attributes loaded"
                );
                Ok(Self::from_defaults(genre, body.attr_map))
            }
            400 => {
                warn!(genre, "server rejected genre");
                Err(EditorError::InvalidGenre(genre.to_string()))
            }
            _ => Err(response.into_error().into()),
        }
    }

    pub fn from_defaults(genre: impl Into<String>, defaults: AttributeMap) -> Self {
        let mut multiple_choice = None;
        let mut flag_position = 0;
        let mut options = Vec::new();
        for (name, value) in defaults.options() {
            if name == MULTIPLE_CHOICE_KEY {
                multiple_choice = Some(*value);
                flag_position = options.len();
                continue;
            }
            options.push(AttributeOption {
                name: name.clone(),
                checked: *value,
                enabled: true,
            });
        }

        let mut editor = Self {
            genre: genre.into(),
            title: defaults.title().to_string(),
            multiple_choice,
            options,
            flag_position,
        };
        editor.restrict_options();
        editor
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Options other than the multiple choice flag, in server order.
    pub fn options(&self) -> &[AttributeOption] {
        &self.options
    }

    pub fn option(&self, name: &str) -> Option<&AttributeOption> {
        self.options.iter().find(|option| option.name == name)
    }

    pub fn has_multiple_choice_flag(&self) -> bool {
        self.multiple_choice.is_some()
    }

    /// Whether options may be selected independently. Always true when the
    /// defaults carried no flag.
    pub fn multiple_choice(&self) -> bool {
        self.multiple_choice.unwrap_or(true)
    }

    pub fn set_multiple_choice(&mut self, enabled: bool) -> Result<(), EditorError> {
        match self.multiple_choice.as_mut() {
            Some(flag) => *flag = enabled,
            None => return Err(EditorError::UnknownOption(MULTIPLE_CHOICE_KEY.into())),
        }
        self.restrict_options();
        Ok(())
    }

    pub fn set_checked(&mut self, name: &str, checked: bool) -> Result<(), EditorError> {
        if name == MULTIPLE_CHOICE_KEY {
            return self.set_multiple_choice(checked);
        }
        let option = self
            .options
            .iter_mut()
            .find(|option| option.name == name)
            .ok_or_else(|| EditorError::UnknownOption(name.to_string()))?;
        if !option.enabled {
            return Err(EditorError::OptionDisabled(name.to_string()));
        }
        option.checked = checked;
        Ok(())
    }

    /// Recomputes every option's enabled/checked state from the flag.
    ///
    /// Derived entirely from current values, so calling it any number of
    /// times yields the same result.
    pub fn restrict_options(&mut self) {
        let allow = self.multiple_choice();
        for option in &mut self.options {
            option.enabled = allow;
            if !allow {
                option.checked = false;
            }
        }
    }

    /// Current form state as an attribute map, with the same keys that were
    /// fetched.
    pub fn attribute_map(&self) -> AttributeMap {
        let mut map = AttributeMap::new(self.title.clone());
        for (position, option) in self.options.iter().enumerate() {
            if position == self.flag_position {
                if let Some(flag) = self.multiple_choice {
                    map.insert(MULTIPLE_CHOICE_KEY, flag);
                }
            }
            map.insert(option.name.clone(), option.checked);
        }
        if self.flag_position >= self.options.len() {
            if let Some(flag) = self.multiple_choice {
                map.insert(MULTIPLE_CHOICE_KEY, flag);
            }
        }
        map
    }

    /// Posts the form. On a 400 the editor is left untouched for another try.
    pub fn submit<T>(&self, transport: &mut T) -> Result<TemplateCreated, EditorError>
    where
        T: Transport + ?Sized,
    {
        if self.title.trim().is_empty() {
            return Err(EditorError::Validation(EMPTY_TITLE_MESSAGE.into()));
        }
        let body = AttributeMapBody {
            attr_map: self.attribute_map(),
        };
        let request = ApiRequest::post_json(endpoints::CREATE_TEMPLATE, &body)?;
        let response = transport.send(request).map_err(ApiError::from)?;
        match response.status {
            201 => {
                info!(title = %self.title, genre = %self.genre, "template created");
                Ok(TemplateCreated {
                    title: self.title.clone(),
                })
            }
            400 => {
                warn!(body = %response.body.trim(), "template rejected");
                Err(EditorError::InvalidAttribute(response.body.trim().to_string()))
            }
            _ => Err(response.into_error().into()),
        }
    }
}
