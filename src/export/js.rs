use std::path::Path;

use tracing::info;

use super::{Result, write_file};
use crate::catalog::ParkCatalog;

/// Global the generated script defines.
pub const JS_VARIABLE: &str = "dogParksData";

/// Render the parks as a script usable both inline and as a CommonJS module.
///
/// The `module.exports` assignment is guarded so that a plain `<script>` include
/// just leaves `dogParksData` defined.
pub fn render_js(catalog: &ParkCatalog) -> Result<String> {
    let data = serde_json::to_string_pretty(&catalog.parks)?;

    Ok(format!(
        "// Auto-generated dog parks data for Compawnion\n\
         // Generated for: {location}\n\
         // Total parks: {total}\n\
         \n\
         const {var} = {data};\n\
         \n\
         // Export for use in HTML\n\
         if (typeof module !== 'undefined' && module.exports) {{\n    \
         module.exports = {var};\n\
         }}\n",
        location = catalog.location,
        total = catalog.len(),
        var = JS_VARIABLE,
        data = data,
    ))
}

pub fn write_js(path: &Path, catalog: &ParkCatalog) -> Result<()> {
    let contents = render_js(catalog)?;
    write_file(path, &contents)?;
    info!(path = %path.display(), parks = catalog.len(), "wrote JavaScript export");
    Ok(())
}
