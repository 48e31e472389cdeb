//! `wt` shell function variants
//!
//! Each variant intercepts the navigation commands, captures the path the
//! binary prints, and changes directory in the calling shell. Anything else
//! is passed through to the binary untouched.

use super::Shell;

/// Present in every variant; its presence in an rc file means "already installed".
pub const INTEGRATION_MARKER: &str = "wt shell function - intercepts navigation commands";

const BIN: &str = "__WT_BIN__";

const POSIX_TEMPLATE: &str = r#"
# wt shell function - intercepts navigation commands for directory changing
wt() {
    local target
    case "$1" in
        og|original|main)
            if target=$(__WT_BIN__ original 2>/dev/null) && [ -n "$target" ]; then
                builtin cd -- "$target"
            else
                __WT_BIN__ original
            fi
            ;;
        s|switch|cd|goto|go)
            if [ $# -lt 2 ]; then
                __WT_BIN__ switch
            elif target=$(__WT_BIN__ switch "$2" 2>/dev/null) && [ -n "$target" ]; then
                builtin cd -- "$target"
            else
                __WT_BIN__ switch "$2"
            fi
            ;;
        *)
            __WT_BIN__ "$@"
            ;;
    esac
}
"#;

const FISH_TEMPLATE: &str = r#"
# wt shell function - intercepts navigation commands for directory changing
function wt
    switch "$argv[1]"
        case og original main
            set -l target (__WT_BIN__ original 2>/dev/null)
            if test $status -eq 0 -a -n "$target"
                builtin cd $target
            else
                __WT_BIN__ original
            end
        case s switch cd goto go
            if test (count $argv) -lt 2
                __WT_BIN__ switch
            else
                set -l target (__WT_BIN__ switch $argv[2] 2>/dev/null)
                if test $status -eq 0 -a -n "$target"
                    builtin cd $target
                else
                    __WT_BIN__ switch $argv[2]
                end
            end
        case '*'
            __WT_BIN__ $argv
    end
end
"#;

/// Integration script for `shell`, invoking `binary`.
///
/// bash and zsh share one body; fish gets its own syntax.
pub fn script(shell: Shell, binary: &str) -> String {
    let template = match shell {
        Shell::Bash | Shell::Zsh => POSIX_TEMPLATE,
        Shell::Fish => FISH_TEMPLATE,
    };
    template.replace(BIN, binary)
}
