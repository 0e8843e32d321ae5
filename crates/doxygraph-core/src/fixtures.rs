//! Doxygen XML samples shared by unit tests.

/// File compound with one include dependency graph.
pub(crate) const SIMPLE_FILE: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" version="1.9.8" xml:lang="en-US">
  <compounddef id="calc_8c" kind="file" language="C++">
    <compoundname>calc/src/calc.c</compoundname>
    <includes refid="calc_8h" local="yes">calc.h</includes>
    <incdepgraph>
      <node id="1">
        <label>calc/src/calc.c</label>
        <link refid="calc_8c"/>
        <childnode refid="2" relation="include">
        </childnode>
      </node>
      <node id="2">
        <label>calc/include/calc.h</label>
        <link refid="calc_8h"/>
      </node>
    </incdepgraph>
    <briefdescription>
    </briefdescription>
    <detaileddescription>
<para>Calculator.</para>
    </detaileddescription>
    <location file="calc/src/calc.c"/>
  </compounddef>
</doxygen>
"#;

/// File compound with include graphs and one function with call references.
pub(crate) const CALC_FILE: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen version="1.9.8" xml:lang="en-US">
  <compounddef id="calc_8c" kind="file" language="C++">
    <compoundname>calc/src/calc.c</compoundname>
    <incdepgraph>
      <node id="3">
        <label>calc/src/calc.c</label>
        <childnode refid="4" relation="include">
        </childnode>
        <childnode refid="5" relation="include">
        </childnode>
      </node>
      <node id="4">
        <label>calc/include/calc.h</label>
      </node>
      <node id="5">
        <label>stdio.h</label>
      </node>
    </incdepgraph>
    <invincdepgraph>
      <node id="6">
        <label>calc/src/calc.c</label>
      </node>
      <node id="7">
        <label>calc/src/main.c</label>
        <childnode refid="6" relation="include">
        </childnode>
      </node>
    </invincdepgraph>
    <sectiondef kind="func">
      <memberdef kind="function" id="calc_8c_1a" prot="public" static="no" const="no" explicit="no" inline="no" virt="non-virtual">
        <type>int</type>
        <definition>int calc</definition>
        <argsstring>(int a, int b)</argsstring>
        <name>calc</name>
        <briefdescription>
<para>Compute.</para>
        </briefdescription>
        <detaileddescription>
        </detaileddescription>
        <inbodydescription>
        </inbodydescription>
        <location file="calc/src/calc.c" line="3"/>
        <references refid="add_8c_1a" compoundref="add_8c" startline="1" endline="4">add</references>
        <references refid="sub_8c_1a" compoundref="sub_8c" startline="1" endline="4">sub</references>
        <referencedby refid="main_8c_1a" compoundref="main_8c" startline="5" endline="9">main</referencedby>
      </memberdef>
    </sectiondef>
    <briefdescription>
    </briefdescription>
    <detaileddescription>
    </detaileddescription>
    <location file="calc/src/calc.c"/>
  </compounddef>
</doxygen>
"#;

/// Class compound whose member has its own description before the class one.
pub(crate) const DERIVED_CLASS: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen version="1.9.8">
  <compounddef id="class_derived" kind="class" language="C++" prot="public">
    <compoundname>Derived</compoundname>
    <basecompoundref refid="class_base" prot="public" virt="non-virtual">Base</basecompoundref>
    <sectiondef kind="public-func">
      <memberdef kind="function" id="class_derived_1a" prot="public" static="no">
        <name>run</name>
        <briefdescription>
        </briefdescription>
        <detaileddescription>
<para>Member text.</para>
        </detaileddescription>
        <inbodydescription>
        </inbodydescription>
      </memberdef>
    </sectiondef>
    <briefdescription>
    </briefdescription>
    <detaileddescription>
<para>Class text.</para>
    </detaileddescription>
    <inheritancegraph>
      <node id="1">
        <label>Derived</label>
        <link refid="class_derived"/>
        <childnode refid="2" relation="public-inheritance">
        </childnode>
      </node>
      <node id="2">
        <label>Base</label>
        <link refid="class_base"/>
      </node>
    </inheritancegraph>
    <collaborationgraph>
      <node id="1">
        <label>Derived</label>
        <childnode refid="2" relation="public-inheritance">
        </childnode>
        <childnode refid="3" relation="usage">
          <edgelabel>helper_</edgelabel>
        </childnode>
      </node>
      <node id="2">
        <label>Base</label>
      </node>
      <node id="3">
        <label>Helper</label>
      </node>
    </collaborationgraph>
    <location file="derived.h" line="4"/>
  </compounddef>
</doxygen>
"#;

/// Header compound with no `<detaileddescription>` at all.
pub(crate) const FILE_WITHOUT_DESCRIPTION: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen version="1.9.8">
<compounddef id="util_8h" kind="file">
<compoundname>lib/util.h</compoundname>
<invincdepgraph>
<node id="1"><label>lib/util.h</label></node>
<node id="2"><label>lib/util.c</label><childnode refid="1" relation="include"></childnode></node>
</invincdepgraph>
</compounddef>
</doxygen>
"#;

/// File compound whose only edge points at an undeclared node.
pub(crate) const DANGLING_ONLY: &str = r#"<doxygen>
<compounddef id="a_8h" kind="file">
<compoundname>a.h</compoundname>
<incdepgraph>
<node id="1"><label>a.h</label><childnode refid="2" relation="include"></childnode></node>
</incdepgraph>
<detaileddescription>
</detaileddescription>
</compounddef>
</doxygen>
"#;

/// Namespace compound: no graph kinds apply.
pub(crate) const NAMESPACE_ONLY: &str = r#"<doxygen>
  <compounddef id="namespacecalc" kind="namespace" language="C++">
    <compoundname>calc</compoundname>
    <inheritancegraph>
      <node id="1"><label>calc</label><childnode refid="2" relation="usage"></childnode></node>
      <node id="2"><label>other</label></node>
    </inheritancegraph>
    <detaileddescription>
    </detaileddescription>
  </compounddef>
</doxygen>
"#;

/// Standalone function member with duplicate outgoing references.
pub(crate) const MEMBER_WITH_CALLS: &str = r#"<memberdef kind="function" id="calc_8c_1a" prot="public" static="no">
<type>int</type>
<name>calc</name>
<briefdescription>
</briefdescription>
<detaileddescription>
<para>Runs it.</para>
</detaileddescription>
<inbodydescription>
</inbodydescription>
<references refid="add_8c_1a">add</references>
<references refid="sub_8c_1a">sub</references>
<references refid="add_8c_1a">add</references>
<referencedby refid="main_8c_1a">main</referencedby>
</memberdef>"#;

/// Function member with references but no description blocks.
pub(crate) const FUNCTION_WITHOUT_ANCHOR: &str = r#"<doxygen>
<compounddef id="namespaceorphan" kind="namespace">
<compoundname>orphans</compoundname>
<sectiondef kind="func">
<memberdef kind="function" id="orphan_1a" prot="public">
<name>orphan</name>
<references refid="x">helper</references>
</memberdef>
</sectiondef>
</compounddef>
</doxygen>
"#;
