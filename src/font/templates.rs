//! Embedded TeX resources written next to the document before compiling.
//!
//! Every template uses [`PLACEHOLDER`] as its only substitution token; it is
//! replaced by the lowercase font family name.

/// Token replaced by the font family name in every template.
pub const PLACEHOLDER: &str = "%%%";

/// File name of the shared encoding table.
pub const ENCODING_FILE: &str = "T1-WGL4.enc";

/// Font-family declaration, written to `t1<family>.fd`.
pub const FAMILY_DECLARATION: &str = r#"\ProvidesFile{t1%%%.fd}
\DeclareFontFamily{T1}{%%%}{}
\DeclareFontShape{T1}{%%%}{m}{n}{ <-> %%%}{}
\pdfmapline{+%%%\space <%%%.ttf\space <T1-WGL4.enc}
"#;

/// Command definition the document must contain to use a prepared font.
pub const USAGE_COMMAND: &str = r#"\newcommand\%%%[1]{\usefont{T1}{%%%}{m}{n} #1 }"#;

/// Hint logged after a font is prepared.
pub const USAGE_EXAMPLE: &str = r#"\%%%{blah blah}"#;

/// LaTeX T1 encoding for WGL4 encoded TrueType fonts. Contains no placeholder.
pub const ENCODING_TABLE: &str = r#"% T1-WGL4.enc
%
%
% This is LaTeX T1 encoding for WGL4 encoded TrueType fonts
% (e.g. from Windows 95)
%
%
% Note that /hyphen appears twice (for the T1 code points `hyphen' 0x2d
% and `hyphenchar' 0x7f).
%
%
% LIGKERN space l =: lslash ;
% LIGKERN space L =: Lslash ;
% LIGKERN question quoteleft =: questiondown ;
% LIGKERN exclam quoteleft =: exclamdown ;
% LIGKERN hyphen hyphen =: endash ;
% LIGKERN endash hyphen =: emdash ;
% LIGKERN quoteleft quoteleft =: quotedblleft ;
% LIGKERN quoteright quoteright =: quotedblright ;
% LIGKERN comma comma =: quotedblbase ;
% LIGKERN less less =: guillemotleft ;
% LIGKERN greater greater =: guillemotright ;
%
% LIGKERN f i =: fi ;
% LIGKERN f l =: fl ;
% LIGKERN f f =: ff ;
% LIGKERN ff i =: ffi ;
% LIGKERN ff l =: ffl ;
%
%   We blow away kerns to and from spaces (TeX doesn't have a
%   space) and also remove any kerns from the numbers.
%
% LIGKERN space {} * ; * {} space ;
% LIGKERN zero {} * ; * {} zero ;
% LIGKERN one {} * ; * {} one ;
% LIGKERN two {} * ; * {} two ;
% LIGKERN three {} * ; * {} three ;
% LIGKERN four {} * ; * {} four ;
% LIGKERN five {} * ; * {} five ;
% LIGKERN six {} * ; * {} six ;
% LIGKERN seven {} * ; * {} seven ;
% LIGKERN eight {} * ; * {} eight ;
% LIGKERN nine {} * ; * {} nine ;

/T1Encoding [          % now 256 chars follow
% 0x00
  /grave /acute /circumflex /tilde
  /dieresis /hungarumlaut /ring /caron
  /breve /macron /dotaccent /cedilla
  /ogonek /quotesinglbase /guilsinglleft /guilsinglright
% 0x10
  /quotedblleft /quotedblright /quotedblbase /guillemotleft
  /guillemotright /endash /emdash /compwordmark
  /perthousandzero /dotlessi /dotlessj /ff
  /fi /fl /ffi /ffl
% 0x20
  /visualspace /exclam /quotedbl /numbersign
  /dollar /percent /ampersand /quoteright
  /parenleft /parenright /asterisk /plus
  /comma /hyphen /period /slash
% 0x30
  /zero /one /two /three
  /four /five /six /seven
  /eight /nine /colon /semicolon
  /less /equal /greater /question
% 0x40
  /at /A /B /C
  /D /E /F /G
  /H /I /J /K
  /L /M /N /O
% 0x50
  /P /Q /R /S
  /T /U /V /W
  /X /Y /Z /bracketleft
  /backslash /bracketright /asciicircum /underscore
% 0x60
  /quoteleft /a /b /c
  /d /e /f /g
  /h /i /j /k
  /l /m /n /o
% 0x70
  /p /q /r /s
  /t /u /v /w
  /x /y /z /braceleft
  /bar /braceright /asciitilde /hyphen
% 0x80
  /Abreve /Aogonek /Cacute /Ccaron
  /Dcaron /Ecaron /Eogonek /Gbreve
  /Lacute /Lcaron /Lslash /Nacute
  /Ncaron /Eng /Odblacute /Racute
% 0x90
  /Rcaron /Sacute /Scaron /Scedilla
  /Tcaron /Tcedilla /Udblacute /Uring
  /Ydieresis /Zacute /Zcaron /Zdot
  /IJ /Idot /dmacron /section
% 0xA0
  /abreve /aogonek /cacute /ccaron
  /dcaron /ecaron /eogonek /gbreve
  /lacute /lcaron /lslash /nacute
  /ncaron /eng /odblacute /racute
% 0xB0
  /rcaron /sacute /scaron /scedilla
  /tcaron /tcedilla /udblacute /uring
  /ydieresis /zacute /zcaron /zdot
  /ij /exclamdown /questiondown /sterling
% 0xC0
  /Agrave /Aacute /Acircumflex /Atilde
  /Adieresis /Aring /AE /Ccedilla
  /Egrave /Eacute /Ecircumflex /Edieresis
  /Igrave /Iacute /Icircumflex /Idieresis
% 0xD0
  /Eth /Ntilde /Ograve /Oacute
  /Ocircumflex /Otilde /Odieresis /OE
  /Oslash /Ugrave /Uacute /Ucircumflex
  /Udieresis /Yacute /Thorn /Germandbls
% 0xE0
  /agrave /aacute /acircumflex /atilde
  /adieresis /aring /ae /ccedilla
  /egrave /eacute /ecircumflex /edieresis
  /igrave /iacute /icircumflex /idieresis
% 0xF0
  /eth /ntilde /ograve /oacute
  /ocircumflex /otilde /odieresis /oe
  /oslash /ugrave /uacute /ucircumflex
  /udieresis /yacute /thorn /germandbls
] def

% eof"#;

fn render(template: &str, family: &str) -> String {
    template.replace(PLACEHOLDER, family)
}

/// Family declaration for `family`.
pub fn render_family_declaration(family: &str) -> String {
    render(FAMILY_DECLARATION, family)
}

/// The `\newcommand` line a document needs before it can use `family`.
pub fn render_usage_command(family: &str) -> String {
    render(USAGE_COMMAND, family)
}

pub fn render_usage_example(family: &str) -> String {
    render(USAGE_EXAMPLE, family)
}
