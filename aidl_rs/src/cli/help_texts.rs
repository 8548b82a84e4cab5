//! Static help text fragments. `{name}` is replaced with the program name.

pub(super) const MODERN_FORMS: &str = "usage:
{name} --lang={java|cpp} [OPTION]... INPUT...
   Generate Java or C++ files for AIDL file(s).

{name} --preprocess OUTPUT INPUT...
   Create an AIDL file having declarations of AIDL file(s).

{name} --dumpapi OUTPUT INPUT...
   Dump API signature of AIDL file(s).

";

pub(super) const LEGACY_JAVA_FORM: &str = "{name} [OPTION]... INPUT [OUTPUT]
   Generate a Java file for an AIDL file.

";

pub(super) const LEGACY_CPP_FORM: &str = "{name} [OPTION]... INPUT HEADER_DIR OUTPUT
   Generate C++ headers and source for an AIDL file.

";

pub(super) const OPTIONS: &str = "OPTION:
  -I DIR, --include=DIR
          Use DIR as a search path for import statements.
  -p FILE, --preprocessed=FILE
          Include FILE which is created by --preprocess.
  -d FILE, --dep=FILE
          Generate dependency file as FILE. Don't use this when
          there are multiple input files. Use -a then.
  -o DIR, --out=DIR
          Use DIR as the base output directory for generated files.
  -h DIR, --header_out=DIR
          Generate C++ headers under DIR.
  -a
          Generate dependency file next to the output file with the
          name based on the input file.
  -b
          Trigger fail when trying to compile a parcelable.
  --ninja
          Generate dependency file in a format ninja understands.
  -t, --trace
          Include tracing code for systrace. Note that if either
          the client or service code is not auto-generated by this
          tool, that part will not be traced.
  --transaction_names
          Generate transaction names.
  --help
          Show this help.

INPUT:
  An AIDL file.

OUTPUT:
  Path to the generated Java or C++ source file. This is ignored when
  -o or --out is specified or the number of the input files are
  more than one.
  For Java, if omitted, Java source file is generated at the same
  place as the input AIDL file,

HEADER_DIR:
  Path to where C++ headers are generated.
";
