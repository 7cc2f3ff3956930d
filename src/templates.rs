//! Starter source bodies for `cmk`.
//!
//! A template maps to one fixed `main.cpp` body. Bodies are literal: nothing
//! is substituted at run time, so the starter compiles the same way for every
//! project name.
//!
//! ## Available Templates
//!
//! - `console` - Basic console application (default)
//! - `sdl2` - SDL2 window application
//! - `wxwidgets` - wxWidgets desktop application
//! - `gtk3` - GTK 3 desktop application

use std::fs;
use std::path::{Path, PathBuf};

use crate::discover::STARTER_SOURCE;
use crate::error::ScaffoldError;
use crate::project::Template;

pub fn starter_source(template: Template) -> &'static str {
    match template {
        Template::Console => {
            r#"#include <iostream>

int main() {
    std::cout << "Hello, world!" << std::endl;
    return 0;
}
"#
        }
        Template::Sdl2 => {
            r#"#include <SDL.h>
#include <iostream>

int main(int argc, char* argv[]) {
    if (SDL_Init(SDL_INIT_VIDEO) < 0) {
        std::cerr << "SDL could not initialize! SDL_Error: " << SDL_GetError() << std::endl;
        return 1;
    }

    SDL_Window* window = SDL_CreateWindow(
        "SDL2 Window",
        SDL_WINDOWPOS_UNDEFINED, SDL_WINDOWPOS_UNDEFINED,
        800, 600,
        SDL_WINDOW_SHOWN
    );

    if (window == nullptr) {
        std::cerr << "Window could not be created! SDL_Error: " << SDL_GetError() << std::endl;
        return 1;
    }

    SDL_Surface* screenSurface = SDL_GetWindowSurface(window);
    SDL_FillRect(screenSurface, nullptr, SDL_MapRGB(screenSurface->format, 0xFF, 0xFF, 0xFF));
    SDL_UpdateWindowSurface(window);

    SDL_Delay(2000);
    SDL_DestroyWindow(window);
    SDL_Quit();
    return 0;
}
"#
        }
        Template::Wxwidgets => {
            r#"#include <wx/wx.h>

class App : public wxApp {
public:
    bool OnInit() override {
        auto* frame = new wxFrame(nullptr, wxID_ANY, "wxWidgets Window",
                                  wxDefaultPosition, wxSize(800, 600));
        frame->Show(true);
        return true;
    }
};

wxIMPLEMENT_APP(App);
"#
        }
        Template::Gtk3 => {
            r#"#include <gtk/gtk.h>

static void activate(GtkApplication* app, gpointer user_data) {
    GtkWidget* window = gtk_application_window_new(app);
    gtk_window_set_title(GTK_WINDOW(window), "GTK Window");
    gtk_window_set_default_size(GTK_WINDOW(window), 800, 600);
    gtk_widget_show_all(window);
}

int main(int argc, char** argv) {
    GtkApplication* app =
        gtk_application_new("org.example.app", G_APPLICATION_DEFAULT_FLAGS);
    g_signal_connect(app, "activate", G_CALLBACK(activate), NULL);
    int status = g_application_run(G_APPLICATION(app), argc, argv);
    g_object_unref(app);
    return status;
}
"#
        }
    }
}

/// Write the starter body to `src/main.cpp` under `root`, unless that file
/// already exists. Returns the written path, or `None` when user content was
/// left alone.
pub fn write_starter(root: &Path, template: Template) -> Result<Option<PathBuf>, ScaffoldError> {
    let path = root.join(STARTER_SOURCE);
    if path.exists() {
        return Ok(None);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, starter_source(template))?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_template() {
        let code = starter_source(Template::Console);
        assert!(code.contains("#include <iostream>"));
        assert!(code.contains("Hello, world!"));
    }

    #[test]
    fn test_sdl2_template() {
        let code = starter_source(Template::Sdl2);
        assert!(code.contains("SDL_Init"));
        assert!(code.contains("SDL_CreateWindow"));
    }

    #[test]
    fn test_wxwidgets_template() {
        let code = starter_source(Template::Wxwidgets);
        assert!(code.contains("wxIMPLEMENT_APP"));
        assert!(code.contains("wxFrame"));
    }

    #[test]
    fn test_gtk3_template() {
        let code = starter_source(Template::Gtk3);
        assert!(code.contains("gtk_application_new"));
        assert!(code.contains("g_application_run"));
    }

    #[test]
    fn test_write_starter_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_starter(dir.path(), Template::Console).unwrap();
        assert!(written.is_some());
        let content = fs::read_to_string(dir.path().join(STARTER_SOURCE)).unwrap();
        assert_eq!(content, starter_source(Template::Console));
    }

    #[test]
    fn test_write_starter_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STARTER_SOURCE);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "// my code\n").unwrap();

        let written = write_starter(dir.path(), Template::Console).unwrap();
        assert!(written.is_none());
        assert_eq!(fs::read_to_string(&path).unwrap(), "// my code\n");
    }
}
